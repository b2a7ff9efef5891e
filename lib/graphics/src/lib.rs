pub mod backends;
pub mod commands;
pub mod graphics;
pub mod handles;
