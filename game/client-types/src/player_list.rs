use serde::{Deserialize, Serialize};

/// One connected player as the server announced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Name shown in the extended player list, may contain colour codes
    pub list_name: String,
    pub group_name: String,
    /// Lower ranks are listed first
    pub group_rank: u8,
}

impl RosterEntry {
    /// An entry of a server that does not send extended list info.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            list_name: name.clone(),
            name,
            group_name: "Players".to_string(),
            group_rank: 0,
        }
    }
}
