//! Hostel Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controllers;
mod grid;
mod markdown;
mod models;
mod pages;
mod session;
mod storage;

use app::App;
use config::CONFIG;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("Starting hostel portal ({})", CONFIG.environment);
    mount_to_body(App);
}
