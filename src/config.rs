use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const DEFAULT_CONFIG_FILE_NAME: &str = "review-request.yaml";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Warn;

const AUTHOR_MARKER: &str = ":male-construction-worker::skin-tone-3:";
const PULL_REQUEST_MARKER: &str = ":github:";
const TICKET_MARKER: &str = ":linear:";
const LOOM_MARKER: &str = ":loom:";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::Level,
    #[serde(default)]
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: Config::default_log_level(),
            markers: Markers::default(),
        }
    }
}

impl Config {
    /// Loads `review-request.yaml` from the working directory, falling back to
    /// the defaults when the file does not exist.
    pub fn load() -> Result<Config> {
        Config::load_from(DEFAULT_CONFIG_FILE_NAME)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_string = fs::read_to_string(path)?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    fn default_log_level() -> log::Level {
        DEFAULT_LOG_LEVEL
    }
}

/// Emoji markers prefixing each line of the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "Markers::default_author")]
    pub author: String,
    #[serde(default = "Markers::default_pull_request")]
    pub pull_request: String,
    #[serde(default = "Markers::default_ticket")]
    pub ticket: String,
    #[serde(default = "Markers::default_loom")]
    pub loom: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            author: Markers::default_author(),
            pull_request: Markers::default_pull_request(),
            ticket: Markers::default_ticket(),
            loom: Markers::default_loom(),
        }
    }
}

impl Markers {
    fn default_author() -> String {
        AUTHOR_MARKER.to_owned()
    }

    fn default_pull_request() -> String {
        PULL_REQUEST_MARKER.to_owned()
    }

    fn default_ticket() -> String {
        TICKET_MARKER.to_owned()
    }

    fn default_loom() -> String {
        LOOM_MARKER.to_owned()
    }
}
