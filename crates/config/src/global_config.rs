use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use color_eyre::{eyre::OptionExt, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;

use crate::DEFAULT_BASE_URL;

const FILE_NAME: &str = "config.json";

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "LABDESK_CONFIG_DIR";

/// User configuration, including the login session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub username: Option<String>,
    pub token: Option<String>,
    pub last_auth: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            token: None,
            last_auth: None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Path::new(&dir).join(FILE_NAME));
        }

        let dirs = ProjectDirs::from("", "", "labdesk")
            .ok_or_eyre("unable to locate the configuration directory")?;

        Ok(dirs.config_dir().join(FILE_NAME))
    }

    pub fn is_first_run() -> Result<bool> {
        Ok(!Self::path()?.exists())
    }

    pub async fn read() -> Result<Self> {
        Self::read_from(&Self::path()?).await
    }

    pub async fn read_from(path: &Path) -> Result<Self> {
        let mut file = tokio::fs::File::open(path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write(&self) -> Result<()> {
        self.write_to(&Self::path()?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;

        tracing::debug!("configuration written to {}", path.display());

        Ok(())
    }

    pub fn update_auth(&mut self, username: &str, token: String) {
        self.username = Some(username.to_string());
        self.token = Some(token);
        self.last_auth = Some(Utc::now());
    }

    pub fn clear_auth(&mut self) {
        self.token = None;
        self.last_auth = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod test {
    use std::env::temp_dir;

    use super::Config;

    #[tokio::test]
    async fn write_then_read() {
        let path = temp_dir().join("labdesk-test").join("config.json");

        let mut config = Config::default();
        config.update_auth("ada", "t0k".into());
        config.write_to(&path).unwrap();

        let read = Config::read_from(&path).await.unwrap();

        assert_eq!(read, config);
        assert_eq!(read.username.as_deref(), Some("ada"));
    }

    #[test]
    fn session_lifecycle() {
        let mut config = Config::default();
        assert!(!config.is_logged_in());

        config.update_auth("ada", "t0k".into());
        assert!(config.is_logged_in());
        assert!(config.last_auth.is_some());

        config.clear_auth();
        assert!(!config.is_logged_in());
        assert_eq!(config.username.as_deref(), Some("ada"));
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let config = Config {
            token: Some(String::new()),
            ..Default::default()
        };

        assert!(!config.is_logged_in());
    }
}
