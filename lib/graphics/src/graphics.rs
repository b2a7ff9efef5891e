pub mod graphics {
    use crate::handles::{
        backend::backend::{GraphicsBackendHandle, GraphicsBackendInterface},
        canvas::canvas::{GraphicsCanvasHandle, WindowProps},
        font::font::GraphicsFontHandle,
        stream::stream::GraphicsStreamHandle,
    };

    #[derive(Debug)]
    pub struct Graphics {
        pub backend_handle: GraphicsBackendHandle,
        pub canvas_handle: GraphicsCanvasHandle,
        pub stream_handle: GraphicsStreamHandle,
        pub font_handle: GraphicsFontHandle,
    }

    impl Graphics {
        pub fn new(backend: Box<dyn GraphicsBackendInterface>, window_props: WindowProps) -> Self {
            let backend_handle = GraphicsBackendHandle::new(backend);
            Self {
                canvas_handle: GraphicsCanvasHandle::new(backend_handle.clone(), window_props),
                stream_handle: GraphicsStreamHandle::new(backend_handle.clone()),
                font_handle: GraphicsFontHandle::new(backend_handle.clone()),
                backend_handle,
            }
        }

        pub fn resized(&self, window_props: WindowProps) {
            self.canvas_handle.resized(window_props);
        }

        /// Ends the frame, all buffered commands are handed to the backend.
        pub fn swap(&self) {
            self.backend_handle.run_cmds();
        }
    }
}
