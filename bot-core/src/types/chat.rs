//! Chat identity: where a command came from and where its replies go.

use serde::{Deserialize, Serialize};

/// Chat (group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
