use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::ui::common::style::{dim_style, key_style};
use crate::ui::common::Popup;
use crate::ui::theme::current_theme;

/// Rend l'overlay d'aide complet centré sur l'écran.
pub fn render(frame: &mut Frame, area: Rect) {
    Popup::new(" Aide ")
        .content(build_help_content())
        .size(70, 80)
        .render(frame, area);
}

/// Construit le contenu textuel de l'overlay d'aide.
fn build_help_content() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        // ── Widgets ──
        section_header("Widgets"),
        separator(),
        key_line("Tab / Shift+Tab", "Widget suivant / précédent"),
        key_line("Enter / Espace", "Ouvrir, puis choisir l'option"),
        key_line("↑↓ / j k", "Parcourir les options"),
        key_line("Home / End", "Première / dernière option"),
        key_line("Esc", "Fermer et effacer le filtre"),
        Line::from(""),
        // ── Filtre & sélection multiple ──
        section_header("Filtre & sélection multiple"),
        separator(),
        key_line("abc…", "Filtrer (widget filtrable ouvert)"),
        key_line("Backspace", "Effacer / retirer la dernière puce"),
        key_line("Suppr", "Retirer la dernière puce"),
        key_line("Clic ×", "Retirer une puce"),
        Line::from(""),
        // ── Application ──
        section_header("Application"),
        separator(),
        key_line("r", "Recharger la liste"),
        key_line("y", "Copier la sélection"),
        key_line("q", "Quitter"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Esc ou ? pour fermer",
            dim_style().add_modifier(Modifier::ITALIC),
        )]),
    ]
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(current_theme().warning),
    )])
}

fn separator() -> Line<'static> {
    Line::from("─".repeat(40))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    let padding = 18usize.saturating_sub(key.chars().count());
    Line::from(vec![
        Span::styled(key.to_string(), key_style()),
        Span::raw(format!("{}{}", " ".repeat(padding), desc)),
    ])
}
