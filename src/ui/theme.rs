//! Configuration des thèmes et couleurs.

use ratatui::style::Color;

/// Thème de couleurs pour l'application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Couleur primaire (bordures, éléments actifs)
    pub primary: Color,
    /// Couleur secondaire (éléments secondaires)
    pub secondary: Color,
    /// Couleur de fond des éléments sélectionnés
    pub selection_bg: Color,
    /// Couleur du texte sélectionné
    pub selection_fg: Color,
    /// Couleur des bordures inactives
    pub border_inactive: Color,
    /// Couleur des bordures actives
    pub border_active: Color,
    /// Couleur de la status bar
    pub status_bar_bg: Color,
    /// Couleur du texte de la status bar
    pub status_bar_fg: Color,
    /// Couleur des messages d'erreur
    pub error: Color,
    /// Couleur des messages de succès
    pub success: Color,
    /// Couleur des avertissements
    pub warning: Color,
    /// Fond des puces de sélection multiple
    pub chip_bg: Color,
    /// Couleur des options et widgets désactivés
    pub disabled: Color,
    /// Couleur du texte normal
    pub text_normal: Color,
    /// Couleur du texte secondaire (dates, métadonnées)
    pub text_secondary: Color,
}

impl Theme {
    /// Thème sombre (défaut).
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            border_inactive: Color::Gray,
            border_active: Color::Cyan,
            status_bar_bg: Color::Cyan,
            status_bar_fg: Color::Black,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            chip_bg: Color::Indexed(238),
            disabled: Color::DarkGray,
            text_normal: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Thème clair.
    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Magenta,
            selection_bg: Color::Gray,
            selection_fg: Color::Black,
            border_inactive: Color::DarkGray,
            border_active: Color::Blue,
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            chip_bg: Color::Indexed(253),
            disabled: Color::Gray,
            text_normal: Color::Black,
            text_secondary: Color::DarkGray,
        }
    }
}

/// Détecte automatiquement le thème du terminal au démarrage.
fn detect_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.5 => Theme::light(),
        _ => Theme::dark(),
    }
}

/// Thème global de l'application (détection automatique).
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(detect_theme);

/// Retourne le thème actuel.
pub fn current_theme() -> &'static Theme {
    &THEME
}
