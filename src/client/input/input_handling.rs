use binds::binds::BindActionsHud;
use client_ui::{hud::screen::HudScreen, types::HudWidgetInterface};
use input_binds::binds::{BindKey, MouseExtra};
use winit::{
    event::{MouseButton, MouseScrollDelta},
    keyboard::PhysicalKey,
};

use crate::client::client::HudHostState;

#[derive(Debug, Clone)]
pub struct InputKeyEv {
    pub key: BindKey,
    pub is_down: bool,
    /// the text the key types, only for key down
    pub text: Option<char>,
}

#[derive(Debug, Clone)]
pub struct InputMouseEv {
    pub x: f32,
    pub y: f32,
    pub btn: MouseButton,
    pub is_down: bool,
}

#[derive(Debug, Clone)]
pub enum InputEv {
    Key(InputKeyEv),
    Mouse(InputMouseEv),
    Scroll(MouseExtra),
    Char(char),
}

/// Collects the window's input events of a frame
/// and hands them to the hud in order.
#[derive(Debug, Default)]
pub struct InputHandling {
    evs: Vec<InputEv>,
}

impl InputHandling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_events(&self) -> bool {
        !self.evs.is_empty()
    }

    /// `text` is the character the key types, if any.
    /// It also arrives as character input right after the key.
    pub fn key_down(&mut self, key: &PhysicalKey, text: Option<char>) {
        self.evs.push(InputEv::Key(InputKeyEv {
            key: BindKey::Key(*key),
            is_down: true,
            text,
        }));
        if let Some(c) = text {
            self.char_input(c);
        }
    }

    pub fn key_up(&mut self, key: &PhysicalKey) {
        self.evs.push(InputEv::Key(InputKeyEv {
            key: BindKey::Key(*key),
            is_down: false,
            text: None,
        }));
    }

    pub fn mouse_down(&mut self, x: f64, y: f64, btn: &MouseButton) {
        self.evs.push(InputEv::Mouse(InputMouseEv {
            x: x as f32,
            y: y as f32,
            btn: *btn,
            is_down: true,
        }));
    }

    pub fn mouse_up(&mut self, x: f64, y: f64, btn: &MouseButton) {
        self.evs.push(InputEv::Mouse(InputMouseEv {
            x: x as f32,
            y: y as f32,
            btn: *btn,
            is_down: false,
        }));
    }

    pub fn scroll(&mut self, delta: &MouseScrollDelta) {
        let wheel_dir = match delta {
            MouseScrollDelta::LineDelta(_, delta) => {
                if *delta < 0.0 {
                    MouseExtra::WheelDown
                } else {
                    MouseExtra::WheelUp
                }
            }
            MouseScrollDelta::PixelDelta(delta) => {
                if delta.y < 0.0 {
                    MouseExtra::WheelDown
                } else {
                    MouseExtra::WheelUp
                }
            }
        };
        self.evs.push(InputEv::Scroll(wheel_dir));
    }

    pub fn char_input(&mut self, c: char) {
        self.evs.push(InputEv::Char(c));
    }

    /// Updates the key state and dispatches all collected events to the hud.
    ///
    /// Mouse buttons and the wheel are bind keys too, so they reach
    /// the hud's key handlers unless the hud consumed them as a click or scroll.
    /// Returns the bind actions that were pressed by these events.
    pub fn handle_hud_inputs(
        &mut self,
        hud: &mut HudScreen,
        state: &mut HudHostState,
    ) -> Vec<BindActionsHud> {
        let mut pressed = Vec::new();
        for ev in self.evs.drain(..) {
            let consumed = match ev {
                InputEv::Key(key_ev) => {
                    if key_ev.is_down {
                        state.input.key_down(&key_ev.key, key_ev.text);
                        pressed.extend(state.input.actions.iter().copied());
                        hud.handle_key_down(&state.pipe(), &key_ev.key)
                    } else {
                        state.input.key_up(&key_ev.key);
                        hud.handle_key_up(&state.pipe(), &key_ev.key)
                    }
                }
                InputEv::Mouse(mouse_ev) => {
                    let key = BindKey::Mouse(mouse_ev.btn);
                    if mouse_ev.is_down {
                        state.input.key_down(&key, None);
                        pressed.extend(state.input.actions.iter().copied());
                        let pipe = state.pipe();
                        hud.handle_mouse_click(&pipe, mouse_ev.x, mouse_ev.y, mouse_ev.btn)
                            || hud.handle_key_down(&pipe, &key)
                    } else {
                        state.input.key_up(&key);
                        hud.handle_key_up(&state.pipe(), &key)
                    }
                }
                InputEv::Scroll(wheel_dir) => {
                    // wheel events have no release
                    let key = BindKey::Extra(wheel_dir);
                    state.input.key_down(&key, None);
                    pressed.extend(state.input.actions.iter().copied());
                    let delta = match wheel_dir {
                        MouseExtra::WheelUp => 1,
                        MouseExtra::WheelDown => -1,
                    };
                    let pipe = state.pipe();
                    let consumed = hud.handle_mouse_scroll(&pipe, delta)
                        || hud.handle_key_down(&pipe, &key);
                    state.input.key_up(&key);
                    hud.handle_key_up(&state.pipe(), &key) || consumed
                }
                InputEv::Char(c) => hud.handle_key_press(&state.pipe(), c),
            };
            log::trace!(target: "input", "event consumed by hud: {consumed}");
        }
        pressed
    }
}
