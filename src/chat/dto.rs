use serde::{Deserialize, Serialize};

use crate::ai::Role;
use crate::profiles::UserProfile;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
    pub session_id: Option<String>,
    pub user_profile: Option<UserProfile>,
}

/// One prior exchange entry as the client stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}
