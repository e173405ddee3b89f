use std::path::PathBuf;

use thiserror::Error;

/// Erreurs principales de team_picker.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Erreur HTTP : {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erreur I/O : {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON invalide : {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration invalide ({path}) : {message}")]
    Config { path: PathBuf, message: String },

    #[error("Erreur terminal : {0}")]
    Terminal(String),

    #[error("Presse-papier : {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}

/// Alias pratique pour Result avec PickerError.
pub type Result<T> = std::result::Result<T, PickerError>;
