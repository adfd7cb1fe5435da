pub mod models;
pub mod settings_loader;
