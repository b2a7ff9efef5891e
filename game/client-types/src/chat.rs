use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMsgChannel {
    Global,
    /// Server announcements, no player attached
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMsg {
    pub player: String,
    pub msg: String,
    pub channel: ChatMsgChannel,
}

impl ChatMsg {
    pub fn line(&self) -> String {
        match self.channel {
            ChatMsgChannel::Global => format!("{}: {}", self.player, self.msg),
            ChatMsgChannel::System => self.msg.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub msg: ChatMsg,
    /// Time the line arrived, in host time
    pub add_time: Duration,
}
