pub mod stream {
    use std::{cell::Cell, rc::Rc};

    use egui::{Color32, Pos2, Rect};

    use crate::{
        commands::{
            AllCommands, CommandRenderQuad, CommandRenderText, CommandsMisc, CommandsRender,
        },
        handles::{backend::backend::GraphicsBackendHandle, font::font::FontContainer},
    };

    /// Immediate mode 2D drawing.
    #[derive(Debug, Clone)]
    pub struct GraphicsStreamHandle {
        backend_handle: GraphicsBackendHandle,
        texturing: Rc<Cell<bool>>,
    }

    impl GraphicsStreamHandle {
        pub(crate) fn new(backend_handle: GraphicsBackendHandle) -> Self {
            Self {
                backend_handle,
                texturing: Default::default(),
            }
        }

        pub fn set_texturing(&self, enabled: bool) {
            self.texturing.set(enabled);
            self.backend_handle
                .add_cmd(AllCommands::Misc(CommandsMisc::SetTexturing(enabled)));
        }

        pub fn texturing(&self) -> bool {
            self.texturing.get()
        }

        pub fn render_quad(&self, rect: Rect, color: Color32) {
            self.backend_handle
                .add_cmd(AllCommands::Render(CommandsRender::Quad(CommandRenderQuad {
                    rect,
                    color,
                    textured: self.texturing.get(),
                })));
        }

        /// Four quads along the inner edges of `rect`.
        pub fn render_rect_outline(&self, rect: Rect, thickness: f32, color: Color32) {
            let Rect { min, max } = rect;
            self.render_quad(
                Rect::from_min_max(min, Pos2::new(max.x, min.y + thickness)),
                color,
            );
            self.render_quad(
                Rect::from_min_max(Pos2::new(min.x, max.y - thickness), max),
                color,
            );
            self.render_quad(
                Rect::from_min_max(
                    Pos2::new(min.x, min.y + thickness),
                    Pos2::new(min.x + thickness, max.y - thickness),
                ),
                color,
            );
            self.render_quad(
                Rect::from_min_max(
                    Pos2::new(max.x - thickness, min.y + thickness),
                    Pos2::new(max.x, max.y - thickness),
                ),
                color,
            );
        }

        pub fn render_text(&self, font: &FontContainer, text: &str, pos: Pos2, color: Color32) {
            self.backend_handle
                .add_cmd(AllCommands::Render(CommandsRender::Text(CommandRenderText {
                    font_index: font.index(),
                    text: text.to_string(),
                    pos,
                    color,
                })));
        }
    }
}
