//! Composant liste stylisé et réutilisable.

use super::{block::StyledBlock, style::dim_style};
use ratatui::{
    layout::Rect,
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Configuration pour une liste stylisée.
pub struct StyledList<'a> {
    items: Vec<ListItem<'a>>,
    title: String,
    empty_hint: &'a str,
}

impl<'a> StyledList<'a> {
    /// Crée une nouvelle liste.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            title: title.into(),
            empty_hint: "",
        }
    }

    /// Définit les éléments de la liste.
    pub fn items(mut self, items: Vec<ListItem<'a>>) -> Self {
        self.items = items;
        self
    }

    /// Texte affiché à la place d'une liste vide.
    pub fn empty_hint(mut self, hint: &'a str) -> Self {
        self.empty_hint = hint;
        self
    }

    /// Rend la liste dans le frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = StyledBlock::new(&self.title).build();

        if self.items.is_empty() {
            let hint = Paragraph::new(self.empty_hint)
                .style(dim_style())
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        frame.render_widget(List::new(self.items).block(block), area);
    }
}
