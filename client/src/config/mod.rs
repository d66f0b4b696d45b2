mod config;
mod ui_config;

pub use config::{get_config_manager, Config};
pub use ui_config::UiConfig;
