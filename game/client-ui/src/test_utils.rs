use std::time::Duration;

use binds::binds::HudKeyMapping;
use client_types::player_list::RosterEntry;
use game_config::config::ConfigHud;
use graphics::{
    backends::recorder::RecorderBackend, graphics::graphics::Graphics,
    handles::canvas::canvas::WindowProps,
};
use crate::types::{HudInputState, HudNativeInterface, HudPipe};

pub fn test_graphics(width: u32, height: u32) -> (Graphics, RecorderBackend) {
    let recorder = RecorderBackend::new();
    let graphics = Graphics::new(
        Box::new(recorder.clone()),
        WindowProps {
            window_width: width,
            window_height: height,
        },
    );
    (graphics, recorder)
}

pub struct HostState {
    pub cur_time: Duration,
    pub config: ConfigHud,
    pub is_active_screen: bool,
    pub using_ext_player_list: bool,
    pub input: HudInputState,
    pub roster: Vec<RosterEntry>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            cur_time: Duration::ZERO,
            config: Default::default(),
            is_active_screen: true,
            using_ext_player_list: false,
            input: HudInputState::new(&HudKeyMapping::default()),
            roster: Default::default(),
        }
    }
}

impl HostState {
    pub fn pipe(&self) -> HudPipe<'_> {
        HudPipe {
            cur_time: self.cur_time,
            config: &self.config,
            is_active_screen: self.is_active_screen,
            using_ext_player_list: self.using_ext_player_list,
            input: &self.input,
            roster: &self.roster,
        }
    }
}

#[derive(Debug, Default)]
pub struct TestNative {
    pub cursor_visible: bool,
    pub cursor_toggles: usize,
    pub regrabs: usize,
}

impl HudNativeInterface for TestNative {
    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn toggle_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.cursor_toggles += 1;
    }

    fn regrab_mouse(&mut self) {
        self.regrabs += 1;
    }
}
