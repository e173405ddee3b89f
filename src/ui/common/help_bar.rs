//! Barre d'aide configurable.

use ratatui::text::{Line, Span};

use super::style::{dim_style, key_style};

/// Un raccourci clavier à afficher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Configuration de la barre d'aide.
pub struct HelpBar<'a> {
    bindings: &'a [KeyBinding],
    separator: &'static str,
    suffix: Option<String>,
}

impl<'a> HelpBar<'a> {
    /// Crée une nouvelle barre d'aide.
    pub fn new(bindings: &'a [KeyBinding]) -> Self {
        Self {
            bindings,
            separator: "  ",
            suffix: None,
        }
    }

    /// Texte discret ajouté après les raccourcis (compteur, etc.).
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Construit la ligne sans la dessiner.
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.bindings.len() * 3 + 2);

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.to_string()));
            }
            spans.push(Span::styled(binding.key, key_style()));
            spans.push(Span::raw(":"));
            spans.push(Span::raw(binding.description));
        }

        if let Some(suffix) = &self.suffix {
            spans.push(Span::raw(self.separator.to_string()));
            spans.push(Span::styled(suffix.clone(), dim_style()));
        }

        Line::from(spans)
    }
}

// Bindings communs réutilisables
pub mod bindings {
    use super::KeyBinding;

    pub const QUIT: KeyBinding = KeyBinding::new("q", "quitter");
    pub const HELP: KeyBinding = KeyBinding::new("?", "aide");
    pub const NAV_UP_DOWN: KeyBinding = KeyBinding::new("↑↓", "naviguer");
    pub const OPEN: KeyBinding = KeyBinding::new("Enter", "ouvrir");
    pub const CHOOSE: KeyBinding = KeyBinding::new("Enter", "choisir");
    pub const ESC: KeyBinding = KeyBinding::new("Esc", "fermer");
    pub const TAB: KeyBinding = KeyBinding::new("Tab", "widget suivant");
    pub const TYPE: KeyBinding = KeyBinding::new("abc", "filtrer");
    pub const REMOVE: KeyBinding = KeyBinding::new("⌫", "retirer");
    pub const REFRESH: KeyBinding = KeyBinding::new("r", "recharger");
    pub const COPY: KeyBinding = KeyBinding::new("y", "copier");
}
