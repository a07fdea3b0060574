use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub root_key: String,
    pub backup_path: PathBuf,
    pub auth_prompt_title: String,
    pub auth_prompt_subtitle: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("PASSVAULT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./passvault_data")),
            root_key: env::var("PASSVAULT_ROOT_KEY").unwrap_or_else(|_| "persist:root".to_string()),
            backup_path: env::var("PASSVAULT_BACKUP_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./passvault_backup.json")),
            auth_prompt_title: env::var("PASSVAULT_AUTH_TITLE")
                .unwrap_or_else(|_| "Unlock your vault".to_string()),
            auth_prompt_subtitle: env::var("PASSVAULT_AUTH_SUBTITLE")
                .unwrap_or_else(|_| "Confirm your identity to continue".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);
