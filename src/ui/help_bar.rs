use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::ui::common::help_bar::{bindings, HelpBar, KeyBinding};
use crate::ui::common::style::dim_style;

/// Rend la barre d'aide persistante en bas de l'écran.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let keys = contextual_bindings(state);
    let counter = format!(
        "{}/{}",
        (state.focus + 1).min(state.widgets.len()),
        state.widgets.len()
    );
    let line = HelpBar::new(&keys).suffix(counter).line();

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(dim_style()),
    );
    frame.render_widget(paragraph, area);
}

/// Raccourcis utiles pour le widget qui a le focus.
pub fn contextual_bindings(state: &AppState) -> Vec<KeyBinding> {
    let Some(widget) = state.focused_widget() else {
        return vec![bindings::REFRESH, bindings::HELP, bindings::QUIT];
    };
    let select = widget.state();
    let config = select.config();

    if select.is_open() {
        let mut keys = vec![bindings::NAV_UP_DOWN, bindings::CHOOSE];
        if config.is_filterable() {
            keys.push(bindings::TYPE);
        }
        if config.is_multiple() {
            keys.push(bindings::REMOVE);
        }
        keys.extend([bindings::ESC, bindings::TAB]);
        keys
    } else {
        let mut keys = vec![bindings::OPEN, bindings::TAB];
        if !select.selected().is_empty() {
            keys.push(bindings::COPY);
        }
        keys.extend([bindings::REFRESH, bindings::HELP, bindings::QUIT]);
        keys
    }
}
