use serde::{Deserialize, Serialize};

/// Classified purpose of an inbound message. Transient, never persisted.
/// `Fallback` is the no-keyword-matched outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Quote,
    Track,
    Booking,
    Faq,
    Handoff,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Track => "track",
            Self::Booking => "booking",
            Self::Faq => "faq",
            Self::Handoff => "handoff",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
