use serde::{Deserialize, Serialize};
use tictactoe_engine::SessionSettings;

const CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub session: SessionSettings,
    pub log_prefix: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        self.session.validate()
    }
}

/// Load the config from an explicit path, or from the default file next to
/// the binary. A missing default file yields the default config; an explicit
/// path that cannot be read is an error.
pub fn load_config(path: Option<&str>) -> Result<Config, String> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?,
        None => match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => content,
            Err(_) => return Ok(Config::default()),
        },
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
