use std::{cell::RefCell, rc::Rc};

use crate::{commands::AllCommands, handles::backend::backend::GraphicsBackendInterface};

/// Keeps every command it receives. Clones share the same record,
/// so a clone can be kept outside of [`crate::graphics::graphics::Graphics`].
#[derive(Debug, Default, Clone)]
pub struct RecorderBackend {
    cmds: Rc<RefCell<Vec<AllCommands>>>,
}

impl RecorderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<AllCommands> {
        std::mem::take(&mut *self.cmds.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.cmds.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.borrow().is_empty()
    }
}

impl GraphicsBackendInterface for RecorderBackend {
    fn run_command(&mut self, cmd: AllCommands) -> anyhow::Result<()> {
        self.cmds.borrow_mut().push(cmd);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use egui::{pos2, Color32, Rect};

    use crate::{
        backends::recorder::RecorderBackend,
        commands::{AllCommands, CommandsMisc, CommandsRender},
        graphics::graphics::Graphics,
        handles::canvas::canvas::WindowProps,
    };

    fn graphics() -> (Graphics, RecorderBackend) {
        let recorder = RecorderBackend::new();
        let graphics = Graphics::new(
            Box::new(recorder.clone()),
            WindowProps {
                window_width: 800,
                window_height: 600,
            },
        );
        (graphics, recorder)
    }

    #[test]
    fn commands_arrive_on_swap() {
        let (graphics, recorder) = graphics();
        graphics.stream_handle.set_texturing(true);
        graphics.stream_handle.render_quad(
            Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)),
            Color32::WHITE,
        );
        assert!(recorder.is_empty());
        assert_eq!(graphics.backend_handle.pending_cmd_count(), 2);

        graphics.swap();
        let cmds = recorder.take();
        assert_eq!(cmds.len(), 2);
        assert!(matches!(
            &cmds[1],
            AllCommands::Render(CommandsRender::Quad(quad)) if quad.textured
        ));
    }

    #[test]
    fn outline_is_four_quads_inside_rect() {
        let (graphics, recorder) = graphics();
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 30.0));
        graphics
            .stream_handle
            .render_rect_outline(rect, 2.0, Color32::WHITE);
        graphics.swap();
        let cmds = recorder.take();
        assert_eq!(cmds.len(), 4);
        for cmd in cmds {
            let AllCommands::Render(CommandsRender::Quad(quad)) = cmd else {
                panic!("expected a quad, got {cmd:?}");
            };
            assert!(rect.contains_rect(quad.rect));
        }
    }

    #[test]
    fn font_released_with_last_clone() {
        let (graphics, recorder) = graphics();
        let font = graphics.font_handle.load_font("Arial", 12.0);
        let font_clone = font.clone();
        drop(font);
        graphics.swap();
        assert!(!recorder
            .take()
            .iter()
            .any(|cmd| matches!(cmd, AllCommands::Misc(CommandsMisc::FontDestroy(_)))));

        drop(font_clone);
        graphics.swap();
        assert!(recorder
            .take()
            .iter()
            .any(|cmd| matches!(cmd, AllCommands::Misc(CommandsMisc::FontDestroy(_)))));
    }

    #[test]
    fn measure_text_scales_with_size() {
        let (graphics, _) = graphics();
        let small = graphics.font_handle.load_font("Arial", 12.0);
        let big = graphics.font_handle.load_font("Arial", 24.0);
        assert!(big.measure_text("Alice").x > small.measure_text("Alice").x);
        assert_eq!(small.measure_text("").x, 0.0);
    }
}
