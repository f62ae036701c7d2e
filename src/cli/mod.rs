mod commands;

mod start;
pub use self::start::{get_config_path, start};
