//! Feedback Manager Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }
    mount_to_body(App);
}
