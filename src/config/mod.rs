//! Configuration management for paybook.
//!
//! Provides XDG-compliant paths for application state and user settings.

mod settings;

pub use settings::{AppSettings, Paths};
