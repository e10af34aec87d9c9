//! SGCP Movements Frontend Entry Point

mod api;
mod app;
mod badge;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod mapper;
mod models;
mod store;
mod timestamp;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
