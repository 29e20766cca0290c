use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub preferences_path: PathBuf,
    pub persist_preferences: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            preferences_path: std::env::var("LOCALE_PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".dashboard/preferences.json")),

            // LOCALE_PERSIST=false keeps the preference for this session only
            persist_preferences: match std::env::var("LOCALE_PERSIST") {
                Ok(value) => parse_flag(&value)?,
                Err(_) => true,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Invalid LOCALE_PERSIST value: '{}'. Expected true or false", other),
    }
}
