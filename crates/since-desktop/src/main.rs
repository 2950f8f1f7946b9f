//! Since Desktop Widget
//!
//! A small undecorated window counting the time since a chosen moment.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bridge;
mod components;
mod state;
mod surface;
mod tray;
mod work_area;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use single_instance::SingleInstance;
use tray::TrayManager;

/// Logical size of the widget window
pub const WIDGET_WIDTH: f64 = 360.0;
pub const WIDGET_HEIGHT: f64 = 160.0;

const INSTANCE_KEY: &str = "since-desktop-widget";

fn main() {
    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "since=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // One widget per user session; the settings file is not shared safely
    let instance = match SingleInstance::new(INSTANCE_KEY) {
        Ok(instance) => instance,
        Err(e) => {
            tracing::error!("Failed to create single-instance guard: {}", e);
            return;
        }
    };
    if !instance.is_single() {
        tracing::info!("Since is already running, exiting");
        return;
    }

    tracing::info!("Starting Since...");

    // Initialize system tray BEFORE Dioxus (must be on main thread)
    let _tray_manager = match TrayManager::new() {
        Ok(manager) => Some(manager),
        Err(e) => {
            tracing::error!("Failed to initialize system tray: {}", e);
            None
        }
    };

    let window = WindowBuilder::new()
        .with_title("Since")
        .with_inner_size(LogicalSize::new(WIDGET_WIDTH, WIDGET_HEIGHT))
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true);

    let config = Config::new()
        .with_window(window)
        .with_menu(None)
        .with_background_color((0, 0, 0, 0));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
