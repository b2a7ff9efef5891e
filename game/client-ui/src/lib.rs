#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

pub mod chat;
pub mod hotbar;
pub mod hud;
pub mod player_list;
pub mod types;

#[cfg(test)]
mod test_utils;
