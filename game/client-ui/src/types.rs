use std::time::Duration;

use binds::binds::{BindActionsHud, HudKeyMapping};
use client_types::player_list::RosterEntry;
use game_config::config::ConfigHud;
use graphics::handles::canvas::canvas::WindowProps;
use input_binds::binds::{BindKey, Binds};

/// Key state of the host and the bind actions of the event
/// that is currently dispatched.
#[derive(Debug, Default)]
pub struct HudInputState {
    pub binds: Binds<BindActionsHud>,
    /// Actions pressed by the current key down event,
    /// or released by the current key up event.
    pub actions: Vec<BindActionsHud>,
    /// Text the current key down event types, if any
    pub key_text: Option<char>,
}

impl HudInputState {
    pub fn new(keys: &HudKeyMapping) -> Self {
        let mut binds = Binds::default();
        keys.register_binds(&mut binds);
        Self {
            binds,
            actions: Vec::new(),
            key_text: None,
        }
    }

    pub fn key_down(&mut self, key: &BindKey, text: Option<char>) {
        self.binds.handle_key_down(key);
        self.actions = self.binds.process().press_actions.into_iter().collect();
        self.key_text = text;
    }

    pub fn key_up(&mut self, key: &BindKey) {
        self.binds.handle_key_up(key);
        self.actions = self.binds.process().click_actions.into_iter().collect();
        self.key_text = None;
    }

    pub fn has_action(&self, action: &BindActionsHud) -> bool {
        self.actions.contains(action)
    }

    /// Forget all held keys, key up events are not delivered while unfocused.
    pub fn clear(&mut self) {
        self.binds.clear_pressed_keys();
        self.actions.clear();
        self.key_text = None;
    }
}

/// Everything the HUD needs to know about the host for one call.
pub struct HudPipe<'a> {
    /// Time since the client started
    pub cur_time: Duration,
    pub config: &'a ConfigHud,
    /// `false` if another screen (e.g. a menu) is on top of the HUD
    pub is_active_screen: bool,
    /// The server supports the extended player list
    pub using_ext_player_list: bool,
    /// Authoritative key state, must already contain the event
    /// that is currently dispatched
    pub input: &'a HudInputState,
    pub roster: &'a [RosterEntry],
}

/// The part of a HUD widget that the HUD screen drives uniformly.
///
/// Input handlers return `true` if the event was consumed.
pub trait HudWidgetInterface {
    fn render(&mut self, pipe: &HudPipe);

    fn on_resize(&mut self, _old: WindowProps, _new: WindowProps) {}

    fn handle_key_down(&mut self, _pipe: &HudPipe, _key: &BindKey) -> bool {
        false
    }

    fn handle_key_up(&mut self, _pipe: &HudPipe, _key: &BindKey) -> bool {
        false
    }

    fn handle_key_press(&mut self, _pipe: &HudPipe, _key: char) -> bool {
        false
    }

    fn handle_mouse_scroll(&mut self, _pipe: &HudPipe, _delta: i32) -> bool {
        false
    }

    /// Frees the widget's resources. Calling it twice is allowed.
    fn dispose(&mut self) {}
}

/// Window and camera access needed on focus changes.
pub trait HudNativeInterface {
    fn is_cursor_visible(&self) -> bool;
    fn toggle_cursor(&mut self, visible: bool);
    /// Let the active camera capture the mouse again.
    fn regrab_mouse(&mut self);
}
