use client_ui::types::HudNativeInterface;

/// Window state of a client without a real window.
#[derive(Debug)]
pub struct HeadlessNative {
    cursor_visible: bool,
    mouse_grabbed: bool,
}

impl Default for HeadlessNative {
    fn default() -> Self {
        Self {
            cursor_visible: true,
            mouse_grabbed: false,
        }
    }
}

impl HeadlessNative {
    pub fn is_mouse_grabbed(&self) -> bool {
        self.mouse_grabbed
    }
}

impl HudNativeInterface for HeadlessNative {
    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn toggle_cursor(&mut self, visible: bool) {
        log::debug!(target: "native", "cursor visible: {visible}");
        self.cursor_visible = visible;
        // a visible cursor is never captured by the camera
        if visible {
            self.mouse_grabbed = false;
        }
    }

    fn regrab_mouse(&mut self) {
        log::debug!(target: "native", "mouse grabbed by the camera");
        self.mouse_grabbed = true;
    }
}
