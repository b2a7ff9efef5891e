pub mod crosshair;
pub mod screen;
