//! Widgets et utilitaires UI réutilisables.

pub mod block;
pub mod help_bar;
pub mod list;
pub mod popup;
pub mod rect;
pub mod style;

pub use block::StyledBlock;
pub use help_bar::{HelpBar, KeyBinding};
pub use list::StyledList;
pub use popup::Popup;
pub use rect::{centered_rect, is_terminal_size_adequate};
