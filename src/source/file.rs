//! Source fichier : un tableau JSON lu sur le disque.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{parse_entity_list, Entity};

use super::EntitySource;

/// Lit la liste depuis un fichier JSON à chaque récupération.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntitySource for FileSource {
    fn key(&self) -> String {
        format!("users:file:{}", self.path.display())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Option<Entity>>> {
        let content = fs::read_to_string(&self.path)?;
        parse_entity_list(&content)
    }
}
