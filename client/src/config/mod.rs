mod bot_config;
mod config;
mod display_config;
mod log_config;

pub use bot_config::BotConfig;
pub use config::{Config, get_config_manager, get_config_path};
pub use display_config::{DisplayConfig, TerminalColor};
pub use log_config::LogConfig;
