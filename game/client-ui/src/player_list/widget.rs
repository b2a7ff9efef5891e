use client_types::player_list::RosterEntry;
use graphics::handles::{font::font::FontContainer, stream::stream::GraphicsStreamHandle};

use crate::types::{HudPipe, HudWidgetInterface};

use super::{
    ext::{self, PlayerListGroup},
    layout::{PlayerListLayout, PlayerListRow},
    normal,
};

/// State shared by both player list variants.
struct PlayerListBase {
    stream_handle: GraphicsStreamHandle,
    /// `None` once disposed
    font: Option<FontContainer>,
    screen_width: f32,
    layout: PlayerListLayout,
}

impl PlayerListBase {
    fn new(stream_handle: &GraphicsStreamHandle, font: &FontContainer, screen_width: f32) -> Self {
        Self {
            stream_handle: stream_handle.clone(),
            font: Some(font.clone()),
            screen_width,
            layout: PlayerListLayout::new(Vec::new(), font, screen_width),
        }
    }

    fn relayout(&mut self, rows: Vec<PlayerListRow>) {
        if let Some(font) = &self.font {
            self.layout = PlayerListLayout::new(rows, font, self.screen_width);
        }
    }
}

/// Names only.
pub struct NormalPlayerList {
    base: PlayerListBase,
    names: Vec<String>,
}

/// Players grouped by rank, shown with their list names.
pub struct ExtPlayerList {
    base: PlayerListBase,
    groups: Vec<PlayerListGroup>,
}

/// The roster overlay. The variant is fixed once created.
pub enum PlayerListWidget {
    Normal(NormalPlayerList),
    Ext(ExtPlayerList),
}

impl PlayerListWidget {
    pub fn new(
        stream_handle: &GraphicsStreamHandle,
        font: &FontContainer,
        screen_width: f32,
        using_ext_player_list: bool,
    ) -> Self {
        let base = PlayerListBase::new(stream_handle, font, screen_width);
        if using_ext_player_list {
            Self::Ext(ExtPlayerList {
                base,
                groups: Vec::new(),
            })
        } else {
            Self::Normal(NormalPlayerList {
                base,
                names: Vec::new(),
            })
        }
    }

    fn base(&self) -> &PlayerListBase {
        match self {
            PlayerListWidget::Normal(list) => &list.base,
            PlayerListWidget::Ext(list) => &list.base,
        }
    }

    fn base_mut(&mut self) -> &mut PlayerListBase {
        match self {
            PlayerListWidget::Normal(list) => &mut list.base,
            PlayerListWidget::Ext(list) => &mut list.base,
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, PlayerListWidget::Ext(_))
    }

    pub fn is_disposed(&self) -> bool {
        self.base().font.is_none()
    }

    /// Names of the basic list, empty for the extended one.
    pub fn names(&self) -> &[String] {
        match self {
            PlayerListWidget::Normal(list) => &list.names,
            PlayerListWidget::Ext(_) => &[],
        }
    }

    /// Groups of the extended list, empty for the basic one.
    pub fn groups(&self) -> &[PlayerListGroup] {
        match self {
            PlayerListWidget::Normal(_) => &[],
            PlayerListWidget::Ext(list) => &list.groups,
        }
    }

    /// Snapshots the roster and centers the list horizontally.
    pub fn init(&mut self, roster: &[RosterEntry]) {
        if self.is_disposed() {
            return;
        }
        match self {
            PlayerListWidget::Normal(list) => {
                list.names = normal::sorted_names(roster);
                list.base.relayout(normal::rows(&list.names));
            }
            PlayerListWidget::Ext(list) => {
                list.groups = ext::groups(roster);
                list.base.relayout(ext::rows(&list.groups));
            }
        }
        log::debug!(
            target: "player_list",
            "player list initialized with {} players",
            roster.len()
        );
    }

    pub fn x(&self) -> f32 {
        self.base().layout.x()
    }

    pub fn y(&self) -> f32 {
        self.base().layout.y()
    }

    pub fn layout(&self) -> &PlayerListLayout {
        &self.base().layout
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.base_mut().layout.move_to(x, y);
    }

    pub fn name_under(&self, x: f32, y: f32) -> Option<&str> {
        self.base().layout.name_under(x, y)
    }
}

impl HudWidgetInterface for PlayerListWidget {
    fn render(&mut self, _pipe: &HudPipe) {
        let base = self.base();
        if let Some(font) = &base.font {
            base.layout.render(&base.stream_handle, font);
        }
    }

    fn dispose(&mut self) {
        match self {
            PlayerListWidget::Normal(list) => list.names.clear(),
            PlayerListWidget::Ext(list) => list.groups.clear(),
        }
        // the last clone of the font frees it
        if self.base_mut().font.take().is_some() {
            log::debug!(target: "player_list", "player list disposed");
        }
    }
}

#[cfg(test)]
mod test {
    use client_types::player_list::RosterEntry;
    use graphics::commands::{AllCommands, CommandsMisc, CommandsRender};

    use crate::{
        test_utils::{test_graphics, HostState},
        types::HudWidgetInterface,
    };

    use super::PlayerListWidget;

    fn roster() -> Vec<RosterEntry> {
        vec![RosterEntry::new("Alice"), RosterEntry::new("Bob")]
    }

    #[test]
    fn variant_follows_flag() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        assert!(PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, true).is_extended());
        assert!(!PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, false).is_extended());
    }

    #[test]
    fn ext_list_renders_group_headers() {
        let (graphics, recorder) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let host = HostState::default();

        let mut normal = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, false);
        normal.init(&roster());
        normal.render(&host.pipe());
        graphics.swap();
        let count_texts = |cmds: Vec<AllCommands>| {
            cmds.into_iter()
                .filter(|cmd| matches!(cmd, AllCommands::Render(CommandsRender::Text(_))))
                .count()
        };
        assert_eq!(count_texts(recorder.take()), 2);

        let mut ext = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, true);
        ext.init(&roster());
        ext.render(&host.pipe());
        graphics.swap();
        assert_eq!(count_texts(recorder.take()), 3);
    }

    #[test]
    fn name_under_after_move() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let mut list = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, false);
        list.init(&roster());
        list.move_to(list.x(), 150.0);
        let rect = list.layout().entries()[1].rect;
        assert_eq!(list.name_under(rect.center().x, rect.center().y), Some("Bob"));
        assert_eq!(list.name_under(rect.center().x, 10.0), None);
    }

    #[test]
    fn variants_keep_their_own_data() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let roster = vec![
            RosterEntry::new("bob"),
            RosterEntry::new("Alice"),
            RosterEntry::new("bob"),
        ];

        let mut normal = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, false);
        normal.init(&roster);
        assert_eq!(normal.names(), ["Alice", "bob"]);
        assert!(normal.groups().is_empty());

        let mut ext = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, true);
        ext.init(&roster);
        assert!(ext.names().is_empty());
        assert_eq!(ext.groups().len(), 1);
        assert_eq!(ext.groups()[0].members.len(), 3);
    }

    #[test]
    fn dispose_releases_font() {
        let (graphics, recorder) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let font_index = font.index();
        let host = HostState::default();
        let mut list = PlayerListWidget::new(&graphics.stream_handle, &font, 800.0, false);
        list.init(&roster());
        drop(font);
        graphics.swap();
        let font_destroyed = |cmds: Vec<AllCommands>| {
            cmds.into_iter().any(|cmd| {
                matches!(
                    cmd,
                    AllCommands::Misc(CommandsMisc::FontDestroy(font)) if font.font_index == font_index
                )
            })
        };
        assert!(!font_destroyed(recorder.take()));

        list.dispose();
        assert!(list.is_disposed());
        assert!(list.names().is_empty());
        graphics.swap();
        assert!(font_destroyed(recorder.take()));

        // no font left to draw with
        list.dispose();
        list.init(&roster());
        list.render(&host.pipe());
        graphics.swap();
        assert!(recorder.take().is_empty());
    }
}
