//! since-core - Core library for Since
//!
//! This crate contains the settings document, the pipeline that maps it onto
//! the widget window, the elapsed-time presenter, and the settings editor
//! logic shared by the desktop shell and tests.

pub mod apply;
pub mod autostart;
pub mod avatar;
pub mod editor;
pub mod error;
pub mod models;
pub mod store;
pub mod surface;
pub mod timer;

pub use error::{EditorError, Error, Result, ValidationError};
pub use models::SettingsDocument;
pub use store::SettingsStore;
