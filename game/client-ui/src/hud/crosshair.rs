use egui::{pos2, vec2, Color32, Rect};
use graphics::handles::stream::stream::GraphicsStreamHandle;

pub const CROSSHAIR_EXTENT: f32 = 30.0;
pub const CROSSHAIR_THICKNESS: f32 = 4.0;

/// Grey that pulses between 150 and 200.
pub fn crosshair_color(elapsed_secs: f64) -> Color32 {
    let intensity = 150 + (50.0 * elapsed_secs.sin().abs()) as u8;
    Color32::from_gray(intensity)
}

/// Horizontal and vertical bar, centered on the viewport.
pub fn crosshair_rects(width: f32, height: f32) -> [Rect; 2] {
    let center = pos2(width / 2.0, height / 2.0);
    [
        Rect::from_center_size(center, vec2(CROSSHAIR_EXTENT, CROSSHAIR_THICKNESS)),
        Rect::from_center_size(center, vec2(CROSSHAIR_THICKNESS, CROSSHAIR_EXTENT)),
    ]
}

pub fn render(stream_handle: &GraphicsStreamHandle, width: f32, height: f32, color: Color32) {
    for rect in crosshair_rects(width, height) {
        stream_handle.render_quad(rect, color);
    }
}
