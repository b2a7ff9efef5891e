pub mod font {
    use std::{cell::Cell, rc::Rc};

    use egui::{vec2, Vec2};

    use crate::{
        commands::{AllCommands, CommandFontCreate, CommandFontDestroy, CommandsMisc},
        handles::backend::backend::GraphicsBackendHandle,
    };

    /// Average glyph advance relative to the font size.
    /// The real glyph metrics only exist inside the backend's rasterizer.
    const AVG_ADVANCE: f32 = 0.55;
    const LINE_HEIGHT: f32 = 1.25;

    #[derive(Debug)]
    struct FontContainerInner {
        index: u128,
        family: String,
        size: f32,
        backend_handle: GraphicsBackendHandle,
    }

    impl Drop for FontContainerInner {
        fn drop(&mut self) {
            log::debug!(target: "graphics", "releasing font {} ({} {})", self.index, self.family, self.size);
            self.backend_handle
                .add_cmd(AllCommands::Misc(CommandsMisc::FontDestroy(
                    CommandFontDestroy {
                        font_index: self.index,
                    },
                )));
        }
    }

    /// A loaded font. Clones share the backend font, which is released
    /// once the last clone is dropped.
    #[derive(Debug, Clone)]
    pub struct FontContainer {
        inner: Rc<FontContainerInner>,
    }

    impl FontContainer {
        pub fn index(&self) -> u128 {
            self.inner.index
        }

        pub fn family(&self) -> &str {
            &self.inner.family
        }

        pub fn size(&self) -> f32 {
            self.inner.size
        }

        pub fn line_height(&self) -> f32 {
            self.inner.size * LINE_HEIGHT
        }

        /// Size of a single line of text.
        pub fn measure_text(&self, text: &str) -> Vec2 {
            vec2(
                text.chars().count() as f32 * self.inner.size * AVG_ADVANCE,
                self.line_height(),
            )
        }
    }

    #[derive(Debug, Clone)]
    pub struct GraphicsFontHandle {
        id_gen: Rc<Cell<u128>>,
        backend_handle: GraphicsBackendHandle,
    }

    impl GraphicsFontHandle {
        pub(crate) fn new(backend_handle: GraphicsBackendHandle) -> Self {
            Self {
                id_gen: Default::default(),
                backend_handle,
            }
        }

        pub fn load_font(&self, family: &str, size: f32) -> FontContainer {
            let index = self.id_gen.get() + 1;
            self.id_gen.set(index);
            self.backend_handle
                .add_cmd(AllCommands::Misc(CommandsMisc::FontCreate(
                    CommandFontCreate {
                        font_index: index,
                        family: family.to_string(),
                        size,
                    },
                )));
            FontContainer {
                inner: Rc::new(FontContainerInner {
                    index,
                    family: family.to_string(),
                    size,
                    backend_handle: self.backend_handle.clone(),
                }),
            }
        }
    }
}
