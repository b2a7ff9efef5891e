use egui::Color32;
use serde::{Deserialize, Serialize};

/// Since the chat has no frame of its own,
/// all chat elements keep this distance to the screen edges.
pub const MARGIN: f32 = 5.0;
pub const CHAT_X: f32 = 10.0;
pub const CHAT_FONT_SIZE: f32 = 14.0;
/// room for the hotbar below the chat log
pub const LOG_BOTTOM_OFFSET: f32 = 80.0;
pub const INPUT_BAR_BOTTOM_OFFSET: f32 = 45.0;
/// lines kept for scrolling, independent of how many are visible
pub const MAX_CHAT_HISTORY: usize = 256;

pub const INPUT_PROMPT: &str = "> ";
pub const INPUT_CARET: &str = "_";

pub fn background_color() -> Color32 {
    Color32::from_black_alpha(127)
}

pub fn system_msg_color() -> Color32 {
    Color32::from_rgb(255, 238, 0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    MsgSend { msg: String },
    ChatClosed,
}
