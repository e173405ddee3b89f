//! Journalisation dans un fichier : la sortie standard appartient à l'interface.

use std::fs::{self, File};
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::{PickerError, Result};

/// Installe le logger global vers `path`, en créant les répertoires parents.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).map_err(|e| PickerError::Other(e.to_string()))
}
