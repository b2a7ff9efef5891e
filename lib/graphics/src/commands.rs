use egui::{Color32, Pos2, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct CommandRenderQuad {
    pub rect: Rect,
    pub color: Color32,
    /// whether texturing was enabled when the quad was submitted
    pub textured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandRenderText {
    pub font_index: u128,
    pub text: String,
    /// top left of the text
    pub pos: Pos2,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandsRender {
    Quad(CommandRenderQuad),
    Text(CommandRenderText),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandFontCreate {
    pub font_index: u128,
    pub family: String,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandFontDestroy {
    pub font_index: u128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandUpdateViewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandsMisc {
    FontCreate(CommandFontCreate),
    FontDestroy(CommandFontDestroy),
    SetTexturing(bool),
    UpdateViewport(CommandUpdateViewport),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AllCommands {
    Render(CommandsRender),
    Misc(CommandsMisc),
}

impl AllCommands {
    /// Whether the command produces pixels.
    pub fn is_draw(&self) -> bool {
        matches!(self, AllCommands::Render(_))
    }
}
