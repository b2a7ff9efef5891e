use std::{path::Path, time::Duration};

use binds::binds::HudKeyMapping;
use client_types::{
    chat::{ChatMsg, ChatMsgChannel},
    player_list::RosterEntry,
};
use client_ui::{
    chat::shared::ChatEvent,
    hud::screen::HudScreen,
    player_list::layout::PlayerListRowKind,
    types::{HudInputState, HudPipe, HudWidgetInterface},
};
use game_config::config::ConfigHud;
use graphics::{
    backends::recorder::RecorderBackend,
    commands::{AllCommands, CommandsRender},
    graphics::graphics::Graphics,
    handles::canvas::canvas::WindowProps,
};
use winit::{
    event::{MouseButton, MouseScrollDelta},
    keyboard::PhysicalKey,
};

use super::{
    input::input_handling::InputHandling,
    native::HeadlessNative,
    session::{demo_roster, demo_session, SessionStep},
};

pub const LOCAL_PLAYER_NAME: &str = "me";

/// Host state the hud reads on every call.
pub struct HudHostState {
    pub cur_time: Duration,
    pub config: ConfigHud,
    pub is_active_screen: bool,
    pub using_ext_player_list: bool,
    pub input: HudInputState,
    pub roster: Vec<RosterEntry>,
}

impl HudHostState {
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

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_cmds: usize,
    pub quads: usize,
    pub texts: usize,
    pub misc_cmds: usize,
}

impl FrameStats {
    pub fn from_cmds(cmds: &[AllCommands]) -> Self {
        cmds.iter().fold(Self::default(), |mut stats, cmd| {
            match cmd {
                AllCommands::Render(CommandsRender::Quad(_)) => stats.quads += 1,
                AllCommands::Render(CommandsRender::Text(_)) => stats.texts += 1,
                AllCommands::Misc(_) => stats.misc_cmds += 1,
            }
            if cmd.is_draw() {
                stats.draw_cmds += 1;
            }
            stats
        })
    }
}

/// A client without a window, the graphics commands are only recorded.
pub struct HudClient {
    recorder: RecorderBackend,
    graphics: Graphics,
    input: InputHandling,
    native: HeadlessNative,

    state: HudHostState,
    hud: HudScreen,

    frame: u64,
    sent_msgs: Vec<String>,
}

impl HudClient {
    pub fn new(config: ConfigHud, window_props: WindowProps) -> anyhow::Result<Self> {
        let input = HudInputState::new(&HudKeyMapping::from_config(&config.binds)?);

        let recorder = RecorderBackend::new();
        let graphics = Graphics::new(Box::new(recorder.clone()), window_props);
        let hud = HudScreen::new(&graphics, &config);

        Ok(Self {
            recorder,
            graphics,
            input: InputHandling::new(),
            native: Default::default(),

            state: HudHostState {
                cur_time: Duration::ZERO,
                config,
                is_active_screen: true,
                using_ext_player_list: false,
                input,
                roster: Vec::new(),
            },
            hud,

            frame: 0,
            sent_msgs: Vec::new(),
        })
    }

    pub fn hud(&self) -> &HudScreen {
        &self.hud
    }

    pub fn native(&self) -> &HeadlessNative {
        &self.native
    }

    pub fn input_mut(&mut self) -> &mut InputHandling {
        &mut self.input
    }

    pub fn state_mut(&mut self) -> &mut HudHostState {
        &mut self.state
    }

    pub fn sent_msgs(&self) -> &[String] {
        &self.sent_msgs
    }

    pub fn set_roster(&mut self, roster: Vec<RosterEntry>, using_ext_player_list: bool) {
        self.state.roster = roster;
        self.state.using_ext_player_list = using_ext_player_list;
    }

    pub fn add_chat_msg(&mut self, msg: ChatMsg) {
        self.hud.add_chat_msg(msg, self.state.cur_time);
    }

    pub fn resize(&mut self, window_props: WindowProps) {
        let old = self.graphics.canvas_handle.window_props();
        self.graphics.resized(window_props);
        self.hud.on_resize(old, window_props);
        log::debug!(
            target: "client",
            "resized {}x{} -> {}x{}",
            old.window_width,
            old.window_height,
            window_props.window_width,
            window_props.window_height
        );
    }

    pub fn set_focus(&mut self, focused: bool) {
        if focused {
            self.hud.gain_focus(&mut self.native);
        } else {
            // key up events are not delivered while unfocused
            self.state.input.clear();
            self.hud.lose_focus(&mut self.native);
        }
    }

    /// Queues a left click on the player's row of the visible roster.
    pub fn click_player(&mut self, name: &str) -> bool {
        let pos = self.hud.player_list().and_then(|player_list| {
            player_list
                .layout()
                .entries()
                .iter()
                .find(|entry| {
                    matches!(
                        &entry.row.kind,
                        PlayerListRowKind::Player { name: entry_name } if entry_name == name
                    )
                })
                .map(|entry| entry.rect.center())
        });
        let Some(pos) = pos else {
            log::warn!(target: "client", "{name} is not in the visible roster");
            return false;
        };
        self.input
            .mouse_down(pos.x as f64, pos.y as f64, &MouseButton::Left);
        self.input.mouse_up(pos.x as f64, pos.y as f64, &MouseButton::Left);
        true
    }

    fn handle_chat_events(&mut self) {
        for ev in self.hud.take_events() {
            match ev {
                ChatEvent::MsgSend { msg } => {
                    log::info!(target: "chat", "{LOCAL_PLAYER_NAME}: {msg}");
                    // no server, echo it back
                    self.hud.add_chat_msg(
                        ChatMsg {
                            player: LOCAL_PLAYER_NAME.to_string(),
                            msg: msg.clone(),
                            channel: ChatMsgChannel::Global,
                        },
                        self.state.cur_time,
                    );
                    self.sent_msgs.push(msg);
                }
                ChatEvent::ChatClosed => {
                    log::debug!(target: "chat", "chat input closed");
                }
            }
        }
    }

    /// Dispatches the collected input, renders the hud and ends the frame.
    pub fn frame(&mut self, delta: Duration) -> FrameStats {
        self.state.cur_time += delta;
        self.frame += 1;

        for action in self.input.handle_hud_inputs(&mut self.hud, &mut self.state) {
            log::debug!(target: "binds", "bind action: {action:?}");
        }
        self.handle_chat_events();

        self.hud.render(&self.state.pipe());
        self.graphics.swap();
        FrameStats::from_cmds(&self.recorder.take())
    }

    pub fn run_step(&mut self, step: SessionStep) -> Option<FrameStats> {
        match step {
            SessionStep::Key {
                code,
                is_down,
                text,
            } => {
                let key = PhysicalKey::Code(code);
                if is_down {
                    self.input.key_down(&key, text);
                } else {
                    self.input.key_up(&key);
                }
            }
            SessionStep::Text(text) => text.chars().for_each(|c| self.input.char_input(c)),
            SessionStep::ClickPlayer(name) => {
                self.click_player(&name);
            }
            SessionStep::Scroll(lines) => {
                self.input.scroll(&MouseScrollDelta::LineDelta(0.0, lines));
            }
            SessionStep::ChatMsg(msg) => self.add_chat_msg(msg),
            SessionStep::Resize(window_props) => self.resize(window_props),
            SessionStep::Focus(focused) => self.set_focus(focused),
            SessionStep::Frame(delta) => {
                let stats = self.frame(delta);
                log::info!(
                    target: "client",
                    "frame {}: {} draw commands ({} quads, {} texts), {} other commands",
                    self.frame,
                    stats.draw_cmds,
                    stats.quads,
                    stats.texts,
                    stats.misc_cmds
                );
                return Some(stats);
            }
        }
        None
    }

    /// Releases the hud and flushes the resulting commands.
    pub fn dispose(&mut self) -> FrameStats {
        self.hud.dispose();
        self.graphics.swap();
        FrameStats::from_cmds(&self.recorder.take())
    }
}

pub fn load_config(path: Option<&str>) -> anyhow::Result<ConfigHud> {
    match path {
        Some(path) => ConfigHud::load(Path::new(path)),
        None => {
            log::info!(target: "config", "no config file given, using defaults");
            Ok(ConfigHud::default())
        }
    }
}

pub fn hud_main(args: Vec<String>) -> anyhow::Result<()> {
    let config = load_config(args.first().map(|arg| arg.as_str()))?;
    let mut client = HudClient::new(
        config,
        WindowProps {
            window_width: 800,
            window_height: 600,
        },
    )?;
    client.set_roster(demo_roster(), true);

    for step in demo_session() {
        client.run_step(step);
    }
    let stats = client.dispose();
    log::info!(
        target: "client",
        "hud disposed, {} commands flushed, sent chat messages: {:?}",
        stats.misc_cmds + stats.draw_cmds,
        client.sent_msgs()
    );
    Ok(())
}
