//! team_picker : widget de sélection déroulant pour le terminal, avec
//! sélection simple ou multiple, filtre, tri, options désactivées, rendu
//! personnalisé et icônes, alimenté par une liste distante de membres.

pub mod app;
pub mod config;
pub mod error;
pub mod error_display;
pub mod handler;
pub mod icons;
pub mod logging;
pub mod model;
pub mod pointer;
pub mod source;
pub mod state;
pub mod ui;
pub mod utils;
