// Settings service module
// Loads and saves layout settings as TOML

mod service;

pub use service::{default_settings_path, SettingsService};
