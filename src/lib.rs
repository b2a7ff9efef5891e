#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

pub mod client;


use client::client::hud_main;
pub use client::*;

#[allow(dead_code)]
fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let mut args: Vec<_> = std::env::args().collect();
    // first arg is the executable
    if !args.is_empty() {
        args.remove(0);
    }
    if let Err(err) = hud_main(args) {
        panic!("exited hud client with an error: {} - {}", err, err.backtrace());
    }
}
