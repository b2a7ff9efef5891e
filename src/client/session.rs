use std::time::Duration;

use client_types::{
    chat::{ChatMsg, ChatMsgChannel},
    player_list::RosterEntry,
};
use graphics::handles::canvas::canvas::WindowProps;
use winit::keyboard::KeyCode;

/// One scripted host event.
#[derive(Debug, Clone)]
pub enum SessionStep {
    Key {
        code: KeyCode,
        is_down: bool,
        /// the character the key types on key down
        text: Option<char>,
    },
    /// Characters produced by the keyboard, one key press each
    Text(String),
    /// Left click on the center of the player's roster row
    ClickPlayer(String),
    /// Wheel lines, positive scrolls up
    Scroll(f32),
    ChatMsg(ChatMsg),
    Resize(WindowProps),
    Focus(bool),
    /// Dispatch the collected input and render
    Frame(Duration),
}

pub const FRAME_TIME: Duration = Duration::from_millis(16);

fn key(code: KeyCode, is_down: bool, text: Option<char>) -> SessionStep {
    SessionStep::Key {
        code,
        is_down,
        text,
    }
}

fn tap(code: KeyCode, text: Option<char>) -> [SessionStep; 2] {
    [key(code, true, text), key(code, false, None)]
}

fn msg(player: &str, msg: &str) -> SessionStep {
    SessionStep::ChatMsg(ChatMsg {
        player: player.to_string(),
        msg: msg.to_string(),
        channel: ChatMsgChannel::Global,
    })
}

pub fn demo_roster() -> Vec<RosterEntry> {
    let entry = |name: &str, group: &str, rank: u8| RosterEntry {
        name: name.to_string(),
        list_name: name.to_string(),
        group_name: group.to_string(),
        group_rank: rank,
    };
    vec![
        entry("Alice", "Players", 10),
        entry("bob", "Players", 10),
        entry("Carol", "Moderators", 1),
        entry("dave", "Guests", 20),
    ]
}

/// Chat, roster lookup while typing, resize, hotbar and focus changes.
pub fn demo_session() -> Vec<SessionStep> {
    let mut steps = vec![
        SessionStep::Frame(FRAME_TIME),
        SessionStep::ChatMsg(ChatMsg {
            player: String::new(),
            msg: "Welcome to the server".to_string(),
            channel: ChatMsgChannel::System,
        }),
        msg("Alice", "hi"),
        SessionStep::Frame(FRAME_TIME),
        key(KeyCode::Tab, true, None),
        SessionStep::Frame(FRAME_TIME),
        SessionStep::Resize(WindowProps {
            window_width: 1000,
            window_height: 600,
        }),
        SessionStep::Frame(FRAME_TIME),
    ];
    // the key that opens the chat also types its character
    steps.extend(tap(KeyCode::KeyT, Some('t')));
    steps.extend([
        SessionStep::Text("hi ".to_string()),
        SessionStep::Frame(FRAME_TIME),
        SessionStep::ClickPlayer("Alice".to_string()),
        SessionStep::Scroll(1.0),
        SessionStep::Frame(FRAME_TIME),
    ]);
    steps.extend(tap(KeyCode::Enter, Some('\r')));
    steps.push(key(KeyCode::Tab, false, None));
    steps.push(SessionStep::Frame(FRAME_TIME));
    steps.extend(tap(KeyCode::Digit3, Some('3')));
    steps.extend([
        SessionStep::Frame(FRAME_TIME),
        SessionStep::Focus(false),
        SessionStep::Frame(FRAME_TIME),
        SessionStep::Focus(true),
        SessionStep::Frame(Duration::from_secs(11)),
    ]);
    steps
}
