pub mod block;
pub mod chat;
pub mod player_list;
