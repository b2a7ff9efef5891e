use std::time::Duration;

use binds::binds::BindActionsHud;
use client_types::chat::ChatMsg;
use game_config::config::ConfigHud;
use graphics::{
    graphics::graphics::Graphics,
    handles::{
        canvas::canvas::{GraphicsCanvasHandle, WindowProps},
        font::font::FontContainer,
        stream::stream::GraphicsStreamHandle,
    },
};
use input_binds::binds::{BindKey, MouseButton};

use crate::{
    chat::{screen::ChatScreen, shared::ChatEvent},
    hotbar::BlockHotbar,
    player_list::widget::PlayerListWidget,
    types::{HudNativeInterface, HudPipe, HudWidgetInterface},
};

use super::crosshair;

/// The in-game overlay: chat, hotbar, player list and crosshair.
///
/// The player list only exists while its bind is held.
pub struct HudScreen {
    stream_handle: GraphicsStreamHandle,
    canvas_handle: GraphicsCanvasHandle,

    chat: ChatScreen,
    hotbar: BlockHotbar,
    player_list: Option<PlayerListWidget>,
    player_font: Option<FontContainer>,

    disposed: bool,
}

impl HudScreen {
    pub fn new(graphics: &Graphics, config: &ConfigHud) -> Self {
        let player_font = graphics.font_handle.load_font(
            &config.player_list_font.family,
            config.player_list_font.size,
        );
        let chat = ChatScreen::new(graphics, config);
        let hotbar = BlockHotbar::new(graphics);
        log::debug!(
            target: "hud",
            "hud created, player list: {}, chat: {}, command: {}",
            config.binds.player_list,
            config.binds.chat,
            config.binds.command
        );
        Self {
            stream_handle: graphics.stream_handle.clone(),
            canvas_handle: graphics.canvas_handle.clone(),

            chat,
            hotbar,
            player_list: None,
            player_font: Some(player_font),

            disposed: false,
        }
    }

    pub fn chat(&self) -> &ChatScreen {
        &self.chat
    }

    pub fn hotbar(&self) -> &BlockHotbar {
        &self.hotbar
    }

    pub fn player_list(&self) -> Option<&PlayerListWidget> {
        self.player_list.as_ref()
    }

    pub fn player_font(&self) -> Option<&FontContainer> {
        self.player_font.as_ref()
    }

    pub fn handles_all_input(&self) -> bool {
        self.chat.handles_all_input()
    }

    pub fn open_text_input_bar(&mut self, text: &str) {
        self.chat.open_text_input_bar(text);
    }

    pub fn add_chat_msg(&mut self, msg: ChatMsg, cur_time: Duration) {
        self.chat.add_msg(msg, cur_time);
    }

    /// Messages the user sent since the last call.
    pub fn take_events(&mut self) -> Vec<ChatEvent> {
        self.chat.take_events()
    }

    fn dispose_player_list(&mut self) {
        if let Some(mut player_list) = self.player_list.take() {
            player_list.dispose();
        }
    }

    /// Clicking a name in the player list while typing
    /// appends the name to the chat input.
    pub fn handle_mouse_click(
        &mut self,
        _pipe: &HudPipe,
        x: f32,
        y: f32,
        button: MouseButton,
    ) -> bool {
        if button != MouseButton::Left || !self.chat.handles_all_input() {
            return false;
        }
        let Some(name) = self
            .player_list
            .as_ref()
            .and_then(|player_list| player_list.name_under(x, y))
            .map(|name| format!("{name} "))
        else {
            return false;
        };
        self.chat.append_text_to_input(&name);
        true
    }

    pub fn gain_focus(&mut self, native: &mut dyn HudNativeInterface) {
        if native.is_cursor_visible() {
            native.toggle_cursor(false);
        }
        native.regrab_mouse();
    }

    pub fn lose_focus(&mut self, native: &mut dyn HudNativeInterface) {
        self.dispose_player_list();
        if !native.is_cursor_visible() {
            native.toggle_cursor(true);
        }
    }
}

impl HudWidgetInterface for HudScreen {
    fn render(&mut self, pipe: &HudPipe) {
        if self.disposed || pipe.config.hide_gui {
            return;
        }
        let show_minimal = !pipe.is_active_screen;

        if self.chat.handles_all_input() {
            self.chat.render_background();
        }
        self.stream_handle.set_texturing(true);
        self.chat.render(pipe);
        if !show_minimal {
            self.hotbar.render(pipe);
        }

        if let Some(player_list) = &mut self.player_list {
            player_list.render(pipe);
        }
        // the key up event can get lost, e.g. while another window had focus
        if self.player_list.is_some()
            && !pipe
                .input
                .binds
                .is_action_active(&BindActionsHud::ShowPlayerList)
        {
            log::debug!(target: "hud", "player list bind is no longer held");
            self.dispose_player_list();
        }
        self.stream_handle.set_texturing(false);

        if self.player_list.is_none() && !show_minimal {
            crosshair::render(
                &self.stream_handle,
                self.canvas_handle.canvas_width(),
                self.canvas_handle.canvas_height(),
                crosshair::crosshair_color(pipe.cur_time.as_secs_f64()),
            );
        }
    }

    fn on_resize(&mut self, old: WindowProps, new: WindowProps) {
        self.chat.on_resize(old, new);
        self.hotbar.on_resize(old, new);
        if let Some(player_list) = &mut self.player_list {
            let delta_x = (new.window_width as f32 - old.window_width as f32) / 2.0;
            player_list.move_to(
                player_list.x() + delta_x,
                new.window_height as f32 / 4.0,
            );
        }
    }

    fn handle_key_down(&mut self, pipe: &HudPipe, key: &BindKey) -> bool {
        if self.player_list.is_none() && pipe.input.has_action(&BindActionsHud::ShowPlayerList) {
            if let Some(font) = &self.player_font {
                let mut player_list = PlayerListWidget::new(
                    &self.stream_handle,
                    font,
                    self.canvas_handle.canvas_width(),
                    pipe.using_ext_player_list,
                );
                player_list.init(pipe.roster);
                player_list.move_to(player_list.x(), self.canvas_handle.canvas_height() / 4.0);
                self.player_list = Some(player_list);
            }
        }

        if self.chat.handle_key_down(pipe, key) {
            return true;
        }
        self.hotbar.handle_key_down(pipe, key)
    }

    fn handle_key_up(&mut self, pipe: &HudPipe, _key: &BindKey) -> bool {
        if self.player_list.is_some() && pipe.input.has_action(&BindActionsHud::ShowPlayerList) {
            self.dispose_player_list();
            return true;
        }
        false
    }

    fn handle_key_press(&mut self, pipe: &HudPipe, key: char) -> bool {
        self.chat.handle_key_press(pipe, key)
    }

    fn handle_mouse_scroll(&mut self, pipe: &HudPipe, delta: i32) -> bool {
        self.chat.handle_mouse_scroll(pipe, delta)
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        // the player list keeps its own reference to the font
        self.player_font = None;
        self.chat.dispose();
        self.hotbar.dispose();
        self.dispose_player_list();
        log::debug!(target: "hud", "hud disposed");
    }
}
