//! Utilitaires divers pour l'application.

pub mod text;

pub use text::{pad_right, truncate};
