pub mod posts;
pub mod users;

use serde::{Deserialize, Serialize};

/// `{"message": ...}` bodies returned by delete and by the health check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
