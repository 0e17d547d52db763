use serde::{Deserialize, Serialize};

use haulbot_core::Intent;

/// Originating channel. Only affects reply wording: messaging channels
/// get terse keyword prompts, web chat gets full sentences. Transport
/// details (form encoding, TwiML, JSON) stay in the adapters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Web,
    Whatsapp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Whatsapp => "whatsapp",
        }
    }
}

/// One inbound message from a channel adapter. `user_id` is opaque to the
/// engine; adapters normalize it (e.g. stripping a `whatsapp:` prefix)
/// before handing it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub user_id: String,
    pub text: String,
    #[serde(default)]
    pub channel: Channel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub intent: Intent,
    pub text: String,
}
