pub mod canvas {
    use std::{cell::Cell, rc::Rc};

    use crate::{
        commands::{AllCommands, CommandUpdateViewport, CommandsMisc},
        handles::backend::backend::GraphicsBackendHandle,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowProps {
        pub window_width: u32,
        pub window_height: u32,
    }

    #[derive(Debug, Clone)]
    pub struct GraphicsCanvasHandle {
        backend_handle: GraphicsBackendHandle,
        window_props: Rc<Cell<WindowProps>>,
    }

    impl GraphicsCanvasHandle {
        pub fn new(backend_handle: GraphicsBackendHandle, window_props: WindowProps) -> Self {
            Self {
                backend_handle,
                window_props: Rc::new(Cell::new(window_props)),
            }
        }

        pub fn resized(&self, window_props: WindowProps) {
            self.window_props.set(window_props);
            self.backend_handle
                .add_cmd(AllCommands::Misc(CommandsMisc::UpdateViewport(
                    CommandUpdateViewport {
                        width: window_props.window_width,
                        height: window_props.window_height,
                    },
                )));
        }

        pub fn window_props(&self) -> WindowProps {
            self.window_props.get()
        }

        pub fn canvas_width(&self) -> f32 {
            self.window_props.get().window_width as f32
        }

        pub fn canvas_height(&self) -> f32 {
            self.window_props.get().window_height as f32
        }
    }
}
