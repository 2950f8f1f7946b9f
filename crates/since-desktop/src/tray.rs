//! System tray integration
//!
//! The widget can be hidden from the taskbar, so the tray is the one place
//! that always reaches the settings window.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    OnceLock,
};

use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
    Icon, TrayIcon, TrayIconBuilder, TrayIconEvent,
};

/// Atomic flags for tray events - shared with UI
pub static OPEN_SETTINGS: AtomicBool = AtomicBool::new(false);
pub static QUIT_REQUESTED: AtomicBool = AtomicBool::new(false);

static SETTINGS_ID: OnceLock<MenuId> = OnceLock::new();
static QUIT_ID: OnceLock<MenuId> = OnceLock::new();

/// System tray manager
pub struct TrayManager {
    _tray_icon: TrayIcon,
}

impl TrayManager {
    /// Create and initialize the system tray
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let settings_item = MenuItem::new("设置", true, None);
        let quit_item = MenuItem::new("退出", true, None);

        let _ = SETTINGS_ID.set(settings_item.id().clone());
        let _ = QUIT_ID.set(quit_item.id().clone());

        let menu = Menu::new();
        menu.append_items(&[&settings_item, &PredefinedMenuItem::separator(), &quit_item])?;

        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip("Since")
            .with_icon(create_heart_icon()?)
            .with_menu_on_left_click(false)
            .build()?;

        tracing::info!("System tray initialized");

        Ok(Self {
            _tray_icon: tray_icon,
        })
    }
}

/// Process pending tray events (menu clicks and icon interactions)
pub fn process_tray_events() {
    let menu_receiver = MenuEvent::receiver();
    while let Ok(event) = menu_receiver.try_recv() {
        let id = &event.id;

        if SETTINGS_ID.get().is_some_and(|sid| sid == id) {
            tracing::info!("Tray: Settings clicked");
            OPEN_SETTINGS.store(true, Ordering::SeqCst);
        } else if QUIT_ID.get().is_some_and(|qid| qid == id) {
            tracing::info!("Tray: Quit clicked");
            QUIT_REQUESTED.store(true, Ordering::SeqCst);
        }
    }

    // Double-click opens the settings window as well
    let icon_receiver = TrayIconEvent::receiver();
    while let Ok(event) = icon_receiver.try_recv() {
        if let TrayIconEvent::DoubleClick { .. } = event {
            OPEN_SETTINGS.store(true, Ordering::SeqCst);
        }
    }
}

/// 32x32 pink heart, drawn from the implicit curve (x² + y² - 1)³ = x²y³
fn create_heart_icon() -> Result<Icon, Box<dyn std::error::Error>> {
    const SIZE: u32 = 32;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);

    for row in 0..SIZE {
        for col in 0..SIZE {
            let x = (f64::from(col) + 0.5) / f64::from(SIZE) * 2.6 - 1.3;
            let y = 1.2 - (f64::from(row) + 0.5) / f64::from(SIZE) * 2.5;
            let inside = (x * x + y * y - 1.0).powi(3) - x * x * y.powi(3) <= 0.0;
            if inside {
                rgba.extend_from_slice(&[0xFF, 0x5A, 0x8C, 0xFF]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    Ok(Icon::from_rgba(rgba, SIZE, SIZE)?)
}
