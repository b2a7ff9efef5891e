use egui::{pos2, vec2, Color32, Pos2, Rect, Vec2};
use graphics::handles::{font::font::FontContainer, stream::stream::GraphicsStreamHandle};

pub const ROWS_PER_COLUMN: usize = 16;
pub const ROW_PADDING: f32 = 2.0;
pub const COLUMN_PADDING: f32 = 10.0;
pub const BACKGROUND_PADDING: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerListRowKind {
    Player { name: String },
    GroupHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerListRow {
    pub text: String,
    pub kind: PlayerListRowKind,
}

impl PlayerListRow {
    pub fn player(name: &str, text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: PlayerListRowKind::Player {
                name: name.to_string(),
            },
        }
    }

    pub fn group_header(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: PlayerListRowKind::GroupHeader,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListEntry {
    pub row: PlayerListRow,
    pub rect: Rect,
}

/// Rows laid out top to bottom in columns of [`ROWS_PER_COLUMN`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListLayout {
    entries: Vec<PlayerListEntry>,
    bounds: Rect,
}

impl PlayerListLayout {
    /// Horizontally centered on `screen_width`, top at `y = 0`.
    pub fn new(rows: Vec<PlayerListRow>, font: &FontContainer, screen_width: f32) -> Self {
        let row_height = font.line_height() + ROW_PADDING;

        let mut entries = Vec::with_capacity(rows.len());
        let mut column_x = 0.0;
        let mut rows = rows.into_iter().peekable();
        while rows.peek().is_some() {
            let column: Vec<_> = rows.by_ref().take(ROWS_PER_COLUMN).collect();
            let column_width = column
                .iter()
                .map(|row| font.measure_text(&row.text).x)
                .fold(0.0, f32::max);
            entries.extend(column.into_iter().enumerate().map(|(index, row)| {
                PlayerListEntry {
                    row,
                    rect: Rect::from_min_size(
                        pos2(column_x, index as f32 * row_height),
                        vec2(column_width, row_height),
                    ),
                }
            }));
            column_x += column_width + COLUMN_PADDING;
        }
        let width = (column_x - COLUMN_PADDING).max(0.0);
        let height = entries.len().min(ROWS_PER_COLUMN) as f32 * row_height;

        let mut res = Self {
            entries,
            bounds: Rect::from_min_size(Pos2::ZERO, vec2(width, height)),
        };
        res.move_to((screen_width - width) / 2.0, 0.0);
        res
    }

    pub fn x(&self) -> f32 {
        self.bounds.min.x
    }

    pub fn y(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn entries(&self) -> &[PlayerListEntry] {
        &self.entries
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let delta = pos2(x, y) - self.bounds.min;
        if delta == Vec2::ZERO {
            return;
        }
        self.bounds = self.bounds.translate(delta);
        for entry in &mut self.entries {
            entry.rect = entry.rect.translate(delta);
        }
    }

    /// Name of the player whose row contains the point.
    pub fn name_under(&self, x: f32, y: f32) -> Option<&str> {
        let pos = pos2(x, y);
        self.entries
            .iter()
            .find(|entry| entry.rect.contains(pos))
            .and_then(|entry| match &entry.row.kind {
                PlayerListRowKind::Player { name } => Some(name.as_str()),
                PlayerListRowKind::GroupHeader => None,
            })
    }

    pub fn render(&self, stream_handle: &GraphicsStreamHandle, font: &FontContainer) {
        stream_handle.render_quad(
            self.bounds.expand(BACKGROUND_PADDING),
            Color32::from_black_alpha(150),
        );
        for entry in &self.entries {
            let color = match entry.row.kind {
                PlayerListRowKind::Player { .. } => Color32::WHITE,
                PlayerListRowKind::GroupHeader => Color32::from_rgb(255, 255, 160),
            };
            stream_handle.render_text(font, &entry.row.text, entry.rect.min, color);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::test_utils::test_graphics;

    use super::{PlayerListLayout, PlayerListRow, ROWS_PER_COLUMN};

    #[test]
    fn centered_columns() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let rows: Vec<_> = (0..ROWS_PER_COLUMN + 1)
            .map(|i| PlayerListRow::player(&format!("p{i}"), &format!("p{i}")))
            .collect();
        let layout = PlayerListLayout::new(rows, &font, 800.0);

        assert!((layout.bounds().center().x - 400.0).abs() < 0.01);
        assert_eq!(layout.y(), 0.0);
        let entries = layout.entries();
        // the 17th row starts the second column
        assert!(entries[ROWS_PER_COLUMN].rect.min.x > entries[0].rect.max.x);
        assert_eq!(entries[ROWS_PER_COLUMN].rect.min.y, entries[0].rect.min.y);
        assert!(entries
            .iter()
            .all(|entry| layout.bounds().contains_rect(entry.rect)));
    }

    #[test]
    fn move_and_hit_test() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let mut layout = PlayerListLayout::new(
            vec![
                PlayerListRow::group_header("Admins"),
                PlayerListRow::player("alice", "&cAlice"),
            ],
            &font,
            800.0,
        );
        layout.move_to(layout.x() + 20.0, 150.0);
        assert_eq!(layout.y(), 150.0);

        let header = layout.entries()[0].rect.center();
        let alice = layout.entries()[1].rect.center();
        assert_eq!(layout.name_under(header.x, header.y), None);
        assert_eq!(layout.name_under(alice.x, alice.y), Some("alice"));
        assert_eq!(layout.name_under(0.0, 0.0), None);
    }

    #[test]
    fn empty_list() {
        let (graphics, _) = test_graphics(800, 600);
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let layout = PlayerListLayout::new(Vec::new(), &font, 800.0);
        assert_eq!(layout.x(), 400.0);
        assert_eq!(layout.name_under(400.0, 0.0), None);
    }
}
