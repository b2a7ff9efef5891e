pub mod backend {
    use std::{cell::RefCell, fmt::Debug, rc::Rc};

    use crate::commands::AllCommands;

    pub trait GraphicsBackendInterface: Debug {
        fn run_command(&mut self, cmd: AllCommands) -> anyhow::Result<()>;

        fn start_commands(&mut self, _command_count: usize) {}

        fn end_commands(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct GraphicsBackendHandleInner {
        backend: Box<dyn GraphicsBackendInterface>,
        cmds: Vec<AllCommands>,
    }

    /// Buffers commands until the next [`GraphicsBackendHandle::run_cmds`].
    #[derive(Debug, Clone)]
    pub struct GraphicsBackendHandle {
        inner: Rc<RefCell<GraphicsBackendHandleInner>>,
    }

    impl GraphicsBackendHandle {
        pub fn new(backend: Box<dyn GraphicsBackendInterface>) -> Self {
            Self {
                inner: Rc::new(RefCell::new(GraphicsBackendHandleInner {
                    backend,
                    cmds: Default::default(),
                })),
            }
        }

        pub fn add_cmd(&self, cmd: AllCommands) {
            self.inner.borrow_mut().cmds.push(cmd);
        }

        pub fn pending_cmd_count(&self) -> usize {
            self.inner.borrow().cmds.len()
        }

        /// Hands all buffered commands to the backend.
        ///
        /// A failing command is logged and skipped, the frame goes on.
        pub fn run_cmds(&self) {
            let mut inner = self.inner.borrow_mut();
            let cmds = std::mem::take(&mut inner.cmds);
            inner.backend.start_commands(cmds.len());
            for cmd in cmds {
                if let Err(err) = inner.backend.run_command(cmd) {
                    log::warn!(target: "graphics", "backend rejected command: {err}");
                }
            }
            if let Err(err) = inner.backend.end_commands() {
                log::warn!(target: "graphics", "backend failed to end commands: {err}");
            }
        }
    }
}
