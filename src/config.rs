//! Configuration de l'application : fichier TOML optionnel surchargé par
//! les options de la ligne de commande.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::source::{EntitySource, FileSource, HttpSource, QueryOptions, DEFAULT_USERS_URL};

/// Nom du répertoire de l'application sous les dossiers système.
const APP_DIR: &str = "team_picker";

/// Contenu du fichier `config.toml`. Toutes les clés sont optionnelles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Charge un fichier de configuration ; une erreur de lecture ou de
    /// syntaxe est une erreur.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PickerError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Comme [`FileConfig::load`], mais un fichier absent donne la
    /// configuration vide.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Valeurs venues de la ligne de commande.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Nombre de `-v`.
    pub verbosity: u8,
}

/// Source des candidats retenue.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSetting {
    Http { url: String, timeout: Duration },
    File(PathBuf),
}

/// Réglages effectifs après fusion fichier + ligne de commande.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: SourceSetting,
    pub retries: u32,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Settings {
    /// Fusionne le fichier lu à `config_path` et la ligne de commande ; la
    /// ligne de commande gagne clé par clé.
    pub fn resolve(file: FileConfig, overrides: &Overrides, config_path: &Path) -> Result<Self> {
        let invalid = |message: String| PickerError::Config {
            path: config_path.to_path_buf(),
            message,
        };

        // Une source donnée en ligne de commande remplace celle du fichier.
        let (url, path) = if overrides.url.is_some() || overrides.file.is_some() {
            (overrides.url.clone(), overrides.file.clone())
        } else {
            (file.url, file.file)
        };

        let timeout = Duration::from_secs(file.timeout_secs.unwrap_or(10));
        let source = match (url, path) {
            (Some(_), Some(_)) => {
                return Err(invalid("`url` et `file` sont exclusifs".to_string()));
            }
            (None, Some(path)) => SourceSetting::File(path),
            (url, None) => SourceSetting::Http {
                url: url.unwrap_or_else(|| DEFAULT_USERS_URL.to_string()),
                timeout,
            },
        };

        let log_level = if overrides.verbosity > 0 {
            level_from_verbosity(overrides.verbosity)
        } else {
            match file.log_level.as_deref() {
                Some(level) => level
                    .parse()
                    .map_err(|_| invalid(format!("niveau de log inconnu : {}", level)))?,
                None => LevelFilter::Warn,
            }
        };

        Ok(Self {
            source,
            retries: file.retries.unwrap_or(QueryOptions::default().retries),
            log_level,
            log_file: overrides
                .log_file
                .clone()
                .or(file.log_file)
                .unwrap_or_else(default_log_path),
        })
    }

    /// Construit la source de candidats correspondante.
    pub fn build_source(&self) -> Arc<dyn EntitySource> {
        match &self.source {
            SourceSetting::Http { url, timeout } => {
                Arc::new(HttpSource::new(url.clone()).timeout(*timeout))
            }
            SourceSetting::File(path) => Arc::new(FileSource::new(path)),
        }
    }

    /// Politique de relance des requêtes.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            retries: self.retries,
            ..QueryOptions::default()
        }
    }
}

/// `warn` par défaut, puis `info`, `debug`, `trace` à chaque `-v`.
pub fn level_from_verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `~/.config/team_picker/config.toml` (selon la plateforme).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// `~/.cache/team_picker/team_picker.log` (selon la plateforme).
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("team_picker.log")
}
