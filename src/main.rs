//! TagPost Frontend Entry Point

mod api;
mod app;
mod autosize;
mod components;
mod context;
mod cookie;
mod models;
mod notify;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
