use std::{collections::VecDeque, time::Duration};

use binds::binds::BindActionsHud;
use client_types::chat::{ChatLine, ChatMsg, ChatMsgChannel};
use egui::{pos2, Color32, Rect};
use game_config::config::{ConfigChat, ConfigHud};
use graphics::{
    graphics::graphics::Graphics,
    handles::{
        canvas::canvas::WindowProps, font::font::FontContainer,
        stream::stream::GraphicsStreamHandle,
    },
};
use input_binds::binds::{BindKey, KeyCode, PhysicalKey};

use crate::types::{HudPipe, HudWidgetInterface};

use super::{
    input::ChatInput,
    shared::{
        background_color, system_msg_color, ChatEvent, CHAT_FONT_SIZE, CHAT_X,
        INPUT_BAR_BOTTOM_OFFSET, INPUT_CARET, INPUT_PROMPT, LOG_BOTTOM_OFFSET, MARGIN,
        MAX_CHAT_HISTORY,
    },
};

/// Chat log and the chat input bar.
///
/// While the input bar is open the chat claims all input.
pub struct ChatScreen {
    stream_handle: GraphicsStreamHandle,
    font: Option<FontContainer>,

    config: ConfigChat,
    window: WindowProps,

    lines: VecDeque<ChatLine>,
    input: Option<ChatInput>,
    /// lines scrolled up from the newest line
    scroll: usize,

    events: Vec<ChatEvent>,
}

impl ChatScreen {
    pub fn new(graphics: &Graphics, config: &ConfigHud) -> Self {
        Self {
            stream_handle: graphics.stream_handle.clone(),
            font: Some(
                graphics
                    .font_handle
                    .load_font(&config.player_list_font.family, CHAT_FONT_SIZE),
            ),

            config: config.chat,
            window: graphics.canvas_handle.window_props(),

            lines: Default::default(),
            input: None,
            scroll: 0,

            events: Default::default(),
        }
    }

    pub fn add_msg(&mut self, msg: ChatMsg, cur_time: Duration) {
        self.lines.push_back(ChatLine {
            msg,
            add_time: cur_time,
        });
        while self.lines.len() > MAX_CHAT_HISTORY {
            self.lines.pop_front();
        }
    }

    pub fn handles_all_input(&self) -> bool {
        self.input.is_some()
    }

    pub fn input_text(&self) -> Option<&str> {
        self.input.as_ref().map(|input| input.text())
    }

    pub fn open_text_input_bar(&mut self, text: &str) {
        self.open_input(text, None);
    }

    pub fn append_text_to_input(&mut self, text: &str) {
        if let Some(input) = &mut self.input {
            input.push_str(text);
        }
    }

    pub fn take_events(&mut self) -> Vec<ChatEvent> {
        std::mem::take(&mut self.events)
    }

    fn open_input(&mut self, text: &str, suppress_next_press: Option<char>) {
        self.input = Some(ChatInput::new(
            text,
            self.config.max_input_len as usize,
            suppress_next_press,
        ));
        self.scroll = 0;
    }

    fn close_input(&mut self) {
        if self.input.take().is_some() {
            self.events.push(ChatEvent::ChatClosed);
        }
        self.scroll = 0;
    }

    fn send_input(&mut self) {
        if let Some(input) = self.input.as_ref() {
            let msg = input.text().trim();
            if !msg.is_empty() {
                log::debug!(target: "chat", "sending chat message: {msg}");
                self.events.push(ChatEvent::MsgSend {
                    msg: msg.to_string(),
                });
            }
        }
        self.close_input();
    }

    fn max_scroll(&self) -> usize {
        self.lines
            .len()
            .saturating_sub(self.config.max_lines as usize)
    }

    fn scroll_by(&mut self, delta: i64) {
        self.scroll = (self.scroll as i64 + delta).clamp(0, self.max_scroll() as i64) as usize;
    }

    /// The lines that are currently shown, oldest first.
    pub fn visible_lines(&self, cur_time: Duration) -> Vec<&ChatLine> {
        let max_lines = self.config.max_lines as usize;
        if self.input.is_some() {
            let end = self.lines.len() - self.scroll.min(self.lines.len());
            let start = end.saturating_sub(max_lines);
            self.lines.range(start..end).collect()
        } else {
            let fade =
                Duration::try_from_secs_f64(self.config.fade_secs).unwrap_or(Duration::ZERO);
            let start = self.lines.len().saturating_sub(max_lines);
            self.lines
                .range(start..)
                .filter(|line| cur_time.saturating_sub(line.add_time) < fade)
                .collect()
        }
    }

    fn line_height(&self) -> f32 {
        self.font
            .as_ref()
            .map(|font| font.line_height())
            .unwrap_or(CHAT_FONT_SIZE)
    }

    fn log_bottom(&self) -> f32 {
        self.window.window_height as f32 - LOG_BOTTOM_OFFSET
    }

    pub fn input_bar_rect(&self) -> Rect {
        let bottom = self.window.window_height as f32 - INPUT_BAR_BOTTOM_OFFSET;
        Rect::from_min_max(
            pos2(MARGIN, bottom - self.line_height() - MARGIN * 2.0),
            pos2(self.window.window_width as f32 - MARGIN, bottom),
        )
    }

    /// Darkens the area of the full chat history while the input is open.
    pub fn render_background(&self) {
        let log_bottom = self.log_bottom();
        let top = log_bottom - self.config.max_lines as f32 * self.line_height();
        self.stream_handle.render_quad(
            Rect::from_min_max(
                pos2(MARGIN, top - MARGIN),
                pos2(self.window.window_width as f32 / 2.0, log_bottom + MARGIN),
            ),
            background_color(),
        );
    }
}

impl HudWidgetInterface for ChatScreen {
    fn render(&mut self, pipe: &HudPipe) {
        let Some(font) = &self.font else {
            return;
        };
        let line_height = font.line_height();
        let log_bottom = self.log_bottom();
        for (index, line) in self
            .visible_lines(pipe.cur_time)
            .into_iter()
            .rev()
            .enumerate()
        {
            let color = match line.msg.channel {
                ChatMsgChannel::Global => Color32::WHITE,
                ChatMsgChannel::System => system_msg_color(),
            };
            self.stream_handle.render_text(
                font,
                &line.msg.line(),
                pos2(CHAT_X, log_bottom - (index + 1) as f32 * line_height),
                color,
            );
        }

        if let Some(input) = &self.input {
            let rect = self.input_bar_rect();
            self.stream_handle.render_quad(rect, background_color());
            self.stream_handle.render_text(
                font,
                &format!("{INPUT_PROMPT}{}{INPUT_CARET}", input.text()),
                pos2(rect.min.x + MARGIN, rect.min.y + MARGIN),
                Color32::WHITE,
            );
        }
    }

    fn on_resize(&mut self, _old: WindowProps, new: WindowProps) {
        self.window = new;
    }

    fn handle_key_down(&mut self, pipe: &HudPipe, key: &BindKey) -> bool {
        if self.input.is_some() {
            if let BindKey::Key(PhysicalKey::Code(code)) = key {
                match code {
                    KeyCode::Enter | KeyCode::NumpadEnter => self.send_input(),
                    KeyCode::Escape => self.close_input(),
                    KeyCode::Backspace => {
                        if let Some(input) = &mut self.input {
                            input.pop();
                        }
                    }
                    KeyCode::PageUp => self.scroll_by(self.config.max_lines as i64),
                    KeyCode::PageDown => self.scroll_by(-(self.config.max_lines as i64)),
                    _ => {}
                }
            }
            return true;
        }

        let input = &pipe.input;
        if input.has_action(&BindActionsHud::ActivateCommandInput) {
            self.open_input("/", input.key_text);
            true
        } else if input.has_action(&BindActionsHud::ActivateChatInput) {
            self.open_input("", input.key_text);
            true
        } else {
            false
        }
    }

    fn handle_key_press(&mut self, _pipe: &HudPipe, key: char) -> bool {
        match &mut self.input {
            Some(input) => {
                input.push_char(key);
                true
            }
            None => false,
        }
    }

    fn handle_mouse_scroll(&mut self, _pipe: &HudPipe, delta: i32) -> bool {
        if self.input.is_some() {
            self.scroll_by(delta as i64);
            true
        } else {
            false
        }
    }

    fn dispose(&mut self) {
        self.lines.clear();
        self.input = None;
        self.scroll = 0;
        if self.font.take().is_some() {
            log::debug!(target: "chat", "chat disposed");
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use binds::binds::HudKeyMapping;
    use client_types::chat::{ChatMsg, ChatMsgChannel};
    use game_config::config::ConfigHud;
    use graphics::commands::{AllCommands, CommandsRender};
    use input_binds::binds::{BindKey, KeyCode};

    use crate::{
        chat::shared::ChatEvent,
        test_utils::{test_graphics, HostState},
        types::{HudInputState, HudWidgetInterface},
    };

    use super::ChatScreen;

    fn msg(text: &str) -> ChatMsg {
        ChatMsg {
            player: "Bob".to_string(),
            msg: text.to_string(),
            channel: ChatMsgChannel::Global,
        }
    }

    /// Taps the key, `text` is what the key types.
    fn tap(chat: &mut ChatScreen, host: &mut HostState, code: KeyCode, text: Option<char>) -> bool {
        let key = BindKey::from(code);
        host.input.key_down(&key, text);
        let res = chat.handle_key_down(&host.pipe(), &key);
        if let Some(c) = text {
            chat.handle_key_press(&host.pipe(), c);
        }
        host.input.key_up(&key);
        chat.handle_key_up(&host.pipe(), &key);
        res
    }

    fn key_down(chat: &mut ChatScreen, host: &mut HostState, code: KeyCode) -> bool {
        tap(chat, host, code, None)
    }

    #[test]
    fn open_type_send() {
        let (graphics, _) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        let mut host = HostState::default();

        assert!(!tap(&mut chat, &mut host, KeyCode::KeyQ, Some('q')));
        assert!(tap(&mut chat, &mut host, KeyCode::KeyT, Some('t')));
        assert!(chat.handles_all_input());
        assert_eq!(chat.input_text(), Some(""));
        for c in "hello".chars() {
            assert!(chat.handle_key_press(&host.pipe(), c));
        }
        assert_eq!(chat.input_text(), Some("hello"));
        // everything is consumed while typing
        assert!(key_down(&mut chat, &mut host, KeyCode::KeyQ));
        assert!(key_down(&mut chat, &mut host, KeyCode::Enter));
        assert!(!chat.handles_all_input());
        assert_eq!(
            chat.take_events(),
            vec![
                ChatEvent::MsgSend {
                    msg: "hello".to_string()
                },
                ChatEvent::ChatClosed
            ]
        );
        assert!(!chat.handle_key_press(&host.pipe(), 'x'));
    }

    #[test]
    fn command_key_prefills_slash() {
        let (graphics, _) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        let mut host = HostState::default();
        assert!(tap(&mut chat, &mut host, KeyCode::Slash, Some('/')));
        chat.handle_key_press(&host.pipe(), 'k');
        assert_eq!(chat.input_text(), Some("/k"));
        assert!(key_down(&mut chat, &mut host, KeyCode::Escape));
        assert_eq!(chat.take_events(), vec![ChatEvent::ChatClosed]);
    }

    #[test]
    fn chat_key_without_text_keeps_first_char() {
        let (graphics, _) = test_graphics(800, 600);
        let mut config = ConfigHud::default();
        config.binds.chat = "f1".to_string();
        let mut chat = ChatScreen::new(&graphics, &config);
        let mut host = HostState {
            input: HudInputState::new(&HudKeyMapping::from_config(&config.binds).unwrap()),
            config,
            ..Default::default()
        };

        assert!(key_down(&mut chat, &mut host, KeyCode::F1));
        for c in "hi".chars() {
            chat.handle_key_press(&host.pipe(), c);
        }
        assert_eq!(chat.input_text(), Some("hi"));
    }

    #[test]
    fn blank_message_is_not_sent() {
        let (graphics, _) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        let mut host = HostState::default();
        chat.open_text_input_bar("   ");
        assert!(key_down(&mut chat, &mut host, KeyCode::Enter));
        assert_eq!(chat.take_events(), vec![ChatEvent::ChatClosed]);
    }

    #[test]
    fn lines_fade_unless_input_is_open() {
        let (graphics, _) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        chat.add_msg(msg("old"), Duration::from_secs(0));
        chat.add_msg(msg("new"), Duration::from_secs(8));

        let visible = chat.visible_lines(Duration::from_secs(12));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].msg.msg, "new");

        chat.open_text_input_bar("");
        assert_eq!(chat.visible_lines(Duration::from_secs(12)).len(), 2);
    }

    #[test]
    fn scrolling_history() {
        let (graphics, _) = test_graphics(800, 600);
        let mut config = ConfigHud::default();
        config.chat.max_lines = 2;
        let mut chat = ChatScreen::new(&graphics, &config);
        let host = HostState::default();
        for i in 0..5 {
            chat.add_msg(msg(&i.to_string()), Duration::ZERO);
        }
        assert!(!chat.handle_mouse_scroll(&host.pipe(), 1));

        chat.open_text_input_bar("");
        assert!(chat.handle_mouse_scroll(&host.pipe(), 1));
        let visible: Vec<_> = chat
            .visible_lines(Duration::ZERO)
            .into_iter()
            .map(|line| line.msg.msg.clone())
            .collect();
        assert_eq!(visible, vec!["2", "3"]);

        // clamped to the oldest line
        chat.handle_mouse_scroll(&host.pipe(), 100);
        assert_eq!(chat.visible_lines(Duration::ZERO)[0].msg.msg, "0");
        chat.handle_mouse_scroll(&host.pipe(), -100);
        assert_eq!(chat.visible_lines(Duration::ZERO)[1].msg.msg, "4");
    }

    #[test]
    fn render_draws_lines_and_input_bar() {
        let (graphics, recorder) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        let host = HostState::default();
        chat.add_msg(msg("hi"), Duration::ZERO);
        chat.render(&host.pipe());
        chat.open_text_input_bar("abc");
        chat.render(&host.pipe());
        graphics.swap();

        let texts: Vec<_> = recorder
            .take()
            .into_iter()
            .filter_map(|cmd| match cmd {
                AllCommands::Render(CommandsRender::Text(text)) => Some(text.text),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Bob: hi", "Bob: hi", "> abc_"]);
    }

    #[test]
    fn dispose_twice() {
        let (graphics, _) = test_graphics(800, 600);
        let mut chat = ChatScreen::new(&graphics, &ConfigHud::default());
        chat.open_text_input_bar("x");
        chat.dispose();
        chat.dispose();
        assert!(!chat.handles_all_input());
    }
}
