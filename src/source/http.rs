//! Source HTTP : un tableau JSON d'utilisateurs.

use std::time::Duration;

use crate::error::Result;
use crate::model::{parse_entity_list, Entity};

use super::EntitySource;

/// Point d'accès par défaut (annuaire de démonstration).
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Délai par défaut d'une requête.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Récupère la liste via un `GET` bloquant.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl EntitySource for HttpSource {
    fn key(&self) -> String {
        format!("users:{}", self.url)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<Option<Entity>>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("team_picker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let body = client.get(&self.url).send()?.error_for_status()?.text()?;
        parse_entity_list(&body)
    }
}
