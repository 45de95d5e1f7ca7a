use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use directories::ProjectDirs;
use crate::errors::AppError;

/// Address copied by the contact card unless the config file says otherwise
pub const DEFAULT_EMAIL: &str = "zlhh3842@gmail.com";

/// Contents of config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address written to the clipboard, verbatim
    pub email: String,
    /// Where tracing output goes; defaults to the platform data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email: DEFAULT_EMAIL.to_string(),
            log_file: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, AppError> {
    ProjectDirs::from("dev", "contact-card", "contact-card-tui").ok_or(AppError::ConfigDir)
}

/// Returns the path to config.toml, creating directories if needed
pub fn config_path() -> Result<PathBuf, AppError> {
    let proj = project_dirs()?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("config.toml"))
}

/// Default log destination: contact-card.log in the platform data dir
pub fn default_log_path() -> Result<PathBuf, AppError> {
    let proj = project_dirs()?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("contact-card.log"))
}

/// Load the config from `path`, or from the platform config dir when `None`.
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Write the config to `path`
pub fn save_config(path: &Path, config: &Config) -> Result<(), AppError> {
    let toml = toml::to_string_pretty(config)?;
    fs::write(path, toml)?;
    Ok(())
}

/// First-run bootstrap for `path`: write the defaults when the file is
/// missing, otherwise load it
pub fn init_config_at(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        let config = Config::default();
        save_config(path, &config)?;
        return Ok(config);
    }
    load_config(Some(path))
}

/// Config for startup. An explicit path (`--config`) is only read, never
/// created; the platform config file is written on first run.
pub fn load_or_init_config(explicit: Option<&Path>) -> Result<Config, AppError> {
    match explicit {
        Some(path) => load_config(Some(path)),
        None => init_config_at(&config_path()?),
    }
}
