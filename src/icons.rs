//! Catalogue d'icônes : étiquette → glyphe affichable.
//!
//! Le catalogue est immuable et passé au widget à sa construction. Une
//! étiquette absente du catalogue ne produit simplement aucune icône.

use std::collections::HashMap;

use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Glyphe de recherche préfixé au déclencheur (`placeholder_icon`).
pub const SEARCH_GLYPH: &str = "⌕";
/// Coche des options sélectionnées.
pub const CHECK_GLYPH: &str = "✓";
/// Contrôle de retrait d'une puce.
pub const REMOVE_GLYPH: &str = "×";
/// Chevron du déclencheur, fermé puis ouvert.
pub const CHEVRON_DOWN: &str = "▾";
pub const CHEVRON_UP: &str = "▴";

/// Étiquettes d'icônes disponibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconType {
    GreenCircle,
    UserIcon,
    UserImage,
}

/// Descripteur d'une icône.
///
/// `width` et `height` sont les dimensions nominales de l'image source ;
/// le terminal n'en affiche que le glyphe.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub glyph: &'static str,
    pub width: u16,
    pub height: u16,
    pub color: Option<Color>,
}

impl IconSpec {
    pub const fn new(glyph: &'static str, width: u16, height: u16) -> Self {
        Self {
            glyph,
            width,
            height,
            color: None,
        }
    }

    pub const fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Span prêt à être rendu.
    pub fn span(&self) -> Span<'static> {
        let style = match self.color {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        Span::styled(self.glyph, style)
    }
}

/// Table immuable des icônes connues.
#[derive(Debug, Clone, PartialEq)]
pub struct IconCatalog {
    entries: HashMap<IconType, IconSpec>,
}

impl IconCatalog {
    /// Catalogue vide : aucune étiquette ne produit d'icône.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Ajoute ou remplace une entrée.
    pub fn with(mut self, icon: IconType, spec: IconSpec) -> Self {
        self.entries.insert(icon, spec);
        self
    }

    /// Cherche l'icône d'une étiquette.
    pub fn lookup(&self, icon: IconType) -> Option<&IconSpec> {
        self.entries.get(&icon)
    }

    /// Span de l'icône, si l'étiquette est fournie et connue.
    pub fn span_for(&self, icon: Option<IconType>) -> Option<Span<'static>> {
        icon.and_then(|icon| self.lookup(icon)).map(IconSpec::span)
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::empty()
            .with(
                IconType::GreenCircle,
                IconSpec::new("●", 8, 8).colored(Color::Green),
            )
            .with(IconType::UserIcon, IconSpec::new("👤", 13, 15))
            .with(
                IconType::UserImage,
                IconSpec::new("◉", 24, 24).colored(Color::LightBlue),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_dimensions() {
        let catalog = IconCatalog::default();
        let circle = catalog.lookup(IconType::GreenCircle).unwrap();
        assert_eq!((circle.width, circle.height), (8, 8));
        let user = catalog.lookup(IconType::UserIcon).unwrap();
        assert_eq!((user.width, user.height), (13, 15));
        let image = catalog.lookup(IconType::UserImage).unwrap();
        assert_eq!((image.width, image.height), (24, 24));
    }

    #[test]
    fn test_unknown_tag_renders_nothing() {
        let catalog = IconCatalog::empty().with(IconType::UserIcon, IconSpec::new("U", 1, 1));
        assert!(catalog.lookup(IconType::GreenCircle).is_none());
        assert!(catalog.span_for(Some(IconType::GreenCircle)).is_none());
        assert!(catalog.span_for(None).is_none());
        assert_eq!(
            catalog.span_for(Some(IconType::UserIcon)).map(|s| s.content.to_string()),
            Some("U".to_string())
        );
    }
}
