#![allow(warnings)]
//! To-Do Widget Entry Point

mod config;
mod error;
mod models;
mod form;
mod state;
mod storage;
mod view_model;
mod logging;
mod context;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(WidgetConfig::default().log_level);
    mount_to_body(App);
}
