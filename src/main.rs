#![allow(warnings)]
//! FosterLink Frontend Entry Point

mod api;
mod app;
mod browse;
mod components;
mod markdown;
mod models;
mod optimistic;
mod pages;
mod routes;
mod session;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}
