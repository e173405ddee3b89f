//! Builder pour les blocs stylisés.

use ratatui::widgets::{Block, Borders};

use super::style::{border_style, disabled_style, title_style};

/// Builder pour créer des blocs avec un style cohérent.
pub struct StyledBlock {
    title: String,
    is_focused: bool,
    is_disabled: bool,
}

impl StyledBlock {
    /// Crée un nouveau builder de bloc.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_focused: false,
            is_disabled: false,
        }
    }

    /// Définit l'état de focus.
    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    /// Bloc grisé (widget désactivé) ; l'emporte sur le focus.
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Construit le widget Block.
    pub fn build(self) -> Block<'static> {
        let (title_style, border_style) = if self.is_disabled {
            (disabled_style(), disabled_style())
        } else {
            (title_style(), border_style(self.is_focused))
        };
        Block::default()
            .title(format!(" {} ", self.title))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(border_style)
    }
}
