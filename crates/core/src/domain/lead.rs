use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Contact record captured for human agent handoff. All fields optional
/// except the identifier; adapters pass whatever the user shared.
/// Immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}
