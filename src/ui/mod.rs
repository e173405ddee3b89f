pub mod common;
pub mod help_bar;
pub mod help_overlay;
pub mod input;
pub mod journal_view;
pub mod layout;
pub mod loading;
pub mod select_view;
pub mod status_bar;
pub mod theme;

#[cfg(test)]
mod tests;

use ratatui::{
    layout::Alignment,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, HitMap};
use crate::ui::common::is_terminal_size_adequate;
use crate::ui::common::style::dim_style;

/// Taille minimale du terminal.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Point d'entrée du rendu : dessine l'écran et relève les zones cliquables
/// de chaque widget.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    if !is_terminal_size_adequate(area, MIN_WIDTH, MIN_HEIGHT) {
        for widget in &mut state.widgets {
            widget.set_hits(HitMap::default());
        }
        let message = Line::styled(
            format!("Terminal trop petit ({}×{} minimum)", MIN_WIDTH, MIN_HEIGHT),
            dim_style(),
        );
        frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), area);
        return;
    }

    let layout = layout::build_layout(area, state.widgets.len());

    status_bar::render(frame, state, layout.status_bar);

    let hit_maps: Vec<HitMap> = state
        .widgets
        .iter()
        .enumerate()
        .map(|(i, widget)| match layout.widgets.get(i) {
            Some(cell) => select_view::render_trigger(frame, widget, *cell, i == state.focus),
            None => HitMap::default(),
        })
        .collect();

    journal_view::render(frame, &state.journal, layout.journal);
    help_bar::render(frame, state, layout.help_bar);

    // Les listes ouvertes passent par-dessus le reste.
    let spinner = state.loading_spinner;
    let focus = state.focus;
    for (i, (widget, mut hits)) in state.widgets.iter_mut().zip(hit_maps).enumerate() {
        if let Some(anchor) = layout.widgets.get(i) {
            select_view::render_dropdown(
                frame,
                widget,
                *anchor,
                layout.body,
                i == focus,
                &spinner,
                &mut hits,
            );
        }
        widget.set_hits(hits);
    }

    if state.show_help {
        help_overlay::render(frame, area);
    }
}
