use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::ui::theme::current_theme;

/// Rend la status bar en haut de l'écran.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    frame.render_widget(Paragraph::new(status_line(state)), area);
}

/// Construit la ligne d'état : source, chargement ou erreur, sélections, flash.
pub fn status_line(state: &AppState) -> Line<'static> {
    let theme = current_theme();

    let mut spans = vec![
        Span::styled(
            " team_picker ",
            Style::default()
                .fg(theme.status_bar_fg)
                .bg(theme.status_bar_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{}  ", state.source_label),
            Style::default().fg(theme.text_secondary),
        ),
    ];

    let failed = state
        .widgets
        .iter()
        .any(|w| w.state().source().error.is_some());

    if state.queries.is_loading() {
        spans.extend(state.loading_spinner.line("chargement").spans);
    } else if failed {
        spans.push(Span::styled("✗ échec du chargement", Style::default().fg(theme.error)));
    } else {
        let count = state
            .widgets
            .first()
            .map(|w| w.state().source().len())
            .unwrap_or_default();
        spans.push(Span::styled(
            format!("✓ {} membres", count),
            Style::default().fg(theme.success),
        ));
    }

    let selections: usize = state.widgets.iter().map(|w| w.state().selected().len()).sum();
    if selections > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{} sélection(s)]", selections),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Ajouter le message flash s'il existe.
    if let Some(msg) = state.current_flash_message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg.to_string(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::QueryClient;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_line_with_flash() {
        let mut state = AppState::new(QueryClient::default(), "users.json");
        state.set_flash_message("Copié ✓");
        let line = text(&status_line(&state));
        assert!(line.starts_with(" team_picker  users.json"));
        assert!(line.contains("✓ 0 membres"));
        assert!(line.ends_with("Copié ✓"));
    }
}
