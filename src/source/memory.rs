//! Source en mémoire, synchrone et déterministe.

use crate::error::{PickerError, Result};
use crate::model::Entity;

use super::EntitySource;

/// Liste fixe, ou échec systématique.
#[derive(Debug, Clone)]
pub struct StaticSource {
    key: String,
    items: Vec<Option<Entity>>,
    failure: Option<String>,
}

impl StaticSource {
    /// Source qui livre toujours `entities`.
    pub fn new(key: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self::with_gaps(key, entities.into_iter().map(Some).collect())
    }

    /// Source dont la liste brute peut contenir des trous.
    pub fn with_gaps(key: impl Into<String>, items: Vec<Option<Entity>>) -> Self {
        Self {
            key: key.into(),
            items,
            failure: None,
        }
    }

    /// Source qui échoue toujours avec `message`.
    pub fn failing(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl EntitySource for StaticSource {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn describe(&self) -> String {
        format!("mémoire ({})", self.key)
    }

    fn fetch(&self) -> Result<Vec<Option<Entity>>> {
        match &self.failure {
            Some(message) => Err(PickerError::Other(message.clone())),
            None => Ok(self.items.clone()),
        }
    }
}
