pub mod backend;
pub mod canvas;
pub mod font;
pub mod stream;
