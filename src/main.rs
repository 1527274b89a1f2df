//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod controller;
mod logger;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
