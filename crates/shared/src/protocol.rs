//! Wire shapes of the remote tag service.

use serde::{Deserialize, Serialize};

use crate::domain::TagRecord;

/// Response wrapper for `GET /tags`. Absent `items` decode as an empty page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub items: Vec<TagRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_remaining: Option<u32>,
}

/// Error body the service sends alongside non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub error_id: Option<i64>,
    pub error_name: Option<String>,
    pub error_message: Option<String>,
}

impl ServiceErrorBody {
    pub fn summary(&self) -> Option<String> {
        match (&self.error_name, &self.error_message) {
            (Some(name), Some(message)) => Some(format!("{name}: {message}")),
            (Some(name), None) => Some(name.clone()),
            (None, Some(message)) => Some(message.clone()),
            (None, None) => None,
        }
    }
}
