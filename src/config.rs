use crate::error::{EntreportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub enterprise: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    pub fn resolve_token(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| self.auth.token.clone())
            .ok_or(EntreportError::NotAuthenticated)
    }

    pub fn resolve_enterprise(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| self.defaults.enterprise.clone())
            .ok_or(EntreportError::MissingEnterprise)
    }

    pub fn resolve_api_url(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string)
            .or_else(|| self.defaults.api_url.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("entreport").join("config.toml");
        return Ok(path);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| EntreportError::Config("Cannot find home directory".into()))?;
    Ok(home.join(".config").join("entreport").join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
