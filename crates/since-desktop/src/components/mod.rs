//! UI Components
//!
//! The widget face and the settings window.

mod avatar;
mod settings;
mod widget;

pub use settings::open_settings_window;
pub use widget::Widget;
