use std::sync::Arc;

use browser::{RecordBrowser, Record, Services, Topic};
use color_eyre::Result;
use config::{Config, ProjectConfig};

use crate::terminal::{StoredSession, TerminalAlerts, TerminalNavigator};

#[derive(Debug, Clone)]
pub struct GlobalContext {
    pub config: Config,
    pub api: lab_api::Client,
    pub default_topic: Topic,
    pub assume_yes: bool,
}

impl GlobalContext {
    pub fn new(config: Config, project: Option<ProjectConfig>, assume_yes: bool) -> Result<Self> {
        let project = project.unwrap_or_default();

        let base_url = std::env::var(lab_api::ENV_NAME)
            .ok()
            .or(project.base_url)
            .unwrap_or_else(|| config.base_url.clone());

        let mut api = lab_api::Client::new(&base_url)?;
        if let Some(token) = config.token.clone() {
            api = api.token(token);
        }

        let default_topic = project
            .default_topic
            .map(|label| Topic::parse(&label))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            config,
            api,
            default_topic,
            assume_yes,
        })
    }

    pub fn services(&self) -> Services {
        Services {
            session: Arc::new(StoredSession::new(&self.config)),
            query: Arc::new(self.api.clone()),
            alerts: Arc::new(TerminalAlerts::new(self.assume_yes)),
            navigator: Arc::new(TerminalNavigator),
        }
    }

    pub fn browser(&self, equipment: Option<Record>) -> RecordBrowser {
        RecordBrowser::new(self.services(), equipment)
    }
}
