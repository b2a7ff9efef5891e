pub mod client;
pub mod input;
pub mod native;
pub mod session;
