#[allow(clippy::module_inception)]
mod config;

pub use config::{
    Config, config_path, get_base_url, load_config, load_config_from, resolve_base_url,
    save_config, save_config_to, validate_base_url,
};
