use std::path::Path;
use tokio::io::AsyncReadExt;

use serde::{Deserialize, Serialize};

/// Per-directory overrides read from `./labdesk.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub base_url: Option<String>,
    pub default_topic: Option<String>,
}

const FILE_PATH: &str = "./labdesk.json";

impl ProjectConfig {
    /// Read from file-system
    pub async fn read() -> Option<Self> {
        Self::read_from(Path::new(FILE_PATH)).await
    }

    pub async fn read_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let mut file = tokio::fs::File::open(path).await.ok()?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await.ok()?;

        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod test {
    use std::env::temp_dir;

    use super::ProjectConfig;

    #[tokio::test]
    async fn missing_file_is_none() {
        let path = temp_dir().join("labdesk-missing.json");

        assert!(ProjectConfig::read_from(&path).await.is_none());
    }

    #[tokio::test]
    async fn partial_file() {
        let path = temp_dir().join("labdesk-project.json");
        tokio::fs::write(&path, r#"{"default_topic": "Staff"}"#)
            .await
            .unwrap();

        let config = ProjectConfig::read_from(&path).await.unwrap();

        assert_eq!(config.default_topic.as_deref(), Some("Staff"));
        assert!(config.base_url.is_none());
    }
}
