//! Handler pour les actions sur le widget qui a le focus.

use log::debug;

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::{AppState, SelectAction, SelectOutcome, SelectState};

/// Handler pour le clavier dans un widget de sélection.
pub struct SelectHandler;

impl ActionHandler for SelectHandler {
    type Action = SelectAction;

    fn can_handle(&self, state: &AppState, _action: &SelectAction) -> bool {
        state.focused_widget().is_some()
    }

    fn handle(&mut self, ctx: &mut HandlerContext, action: SelectAction) -> Result<()> {
        let Some(widget) = ctx.state.focused_widget_mut() else {
            return Ok(());
        };
        let select = widget.state_mut();

        match action {
            SelectAction::Confirm => handle_confirm(select),
            SelectAction::ToggleOpen => select.toggle_open(),
            SelectAction::Close => select.outside_interaction(),
            SelectAction::CursorUp => select.cursor_up(),
            SelectAction::CursorDown => select.cursor_down(),
            SelectAction::CursorFirst => select.cursor_first(),
            SelectAction::CursorLast => select.cursor_last(),
            SelectAction::InsertChar(c) => {
                select.push_filter_char(c);
            }
            SelectAction::DeleteChar => handle_delete_char(select),
            SelectAction::RemoveLast => {
                select.remove_last();
            }
        }
        Ok(())
    }
}

/// Enter : ouvre la liste fermée, sinon choisit l'option sous le curseur.
fn handle_confirm(select: &mut SelectState) {
    if !select.is_open() {
        select.toggle_open();
        return;
    }
    if let SelectOutcome::Ignored = select.select_at_cursor() {
        debug!("'{}' : rien à choisir sous le curseur", select.config().label());
    }
}

/// Backspace : efface le filtre, puis retire les puces une à une.
fn handle_delete_char(select: &mut SelectState) {
    if !select.pop_filter_char() {
        select.remove_last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;
    use crate::source::{QueryClient, QuerySnapshot, StaticSource};
    use crate::state::SelectConfig;
    use std::sync::Arc;

    fn app(configure: impl FnOnce(SelectConfig) -> SelectConfig) -> AppState {
        let mut state = AppState::new(QueryClient::default(), "test");
        let config = configure(SelectConfig::new("Membre", "Choisir", state.notifier("Membre")));
        state.mount(config, Arc::new(StaticSource::new("users", Vec::new())));
        state.widgets[0].state_mut().sync_source(&QuerySnapshot::ready(vec![
            Some(Entity::new(1, "Ann", "ann")),
            Some(Entity::new(2, "Bo", "bo")),
        ]));
        state
    }

    fn run(state: &mut AppState, action: SelectAction) {
        let mut ctx = HandlerContext { state };
        SelectHandler.handle(&mut ctx, action).unwrap();
    }

    #[test]
    fn test_confirm_opens_then_selects() {
        let mut state = app(|c| c);
        run(&mut state, SelectAction::Confirm);
        assert!(state.widgets[0].state().is_open());

        run(&mut state, SelectAction::CursorDown);
        run(&mut state, SelectAction::Confirm);
        assert_eq!(state.widgets[0].state().selected().ids(), vec![2]);
        assert!(!state.widgets[0].state().is_open());
        assert_eq!(state.drain_selection_events(), 1);
    }

    #[test]
    fn test_backspace_edits_filter_then_removes_chip() {
        let mut state = app(|c| c.multiple(true).filterable(true));
        run(&mut state, SelectAction::Confirm);
        run(&mut state, SelectAction::Confirm);
        run(&mut state, SelectAction::InsertChar('b'));
        assert_eq!(state.widgets[0].state().view().len(), 1);

        run(&mut state, SelectAction::DeleteChar);
        assert_eq!(state.widgets[0].state().filter(), "");
        assert_eq!(state.widgets[0].state().selected().len(), 1);

        run(&mut state, SelectAction::DeleteChar);
        assert!(state.widgets[0].state().selected().is_empty());
        assert!(state.widgets[0].state().is_open());
    }

    #[test]
    fn test_escape_closes_and_clears_filter() {
        let mut state = app(|c| c.filterable(true));
        run(&mut state, SelectAction::Confirm);
        run(&mut state, SelectAction::InsertChar('a'));
        run(&mut state, SelectAction::Close);
        assert!(!state.widgets[0].state().is_open());
        assert_eq!(state.widgets[0].state().filter(), "");
    }

    #[test]
    fn test_no_widget_is_a_no_op() {
        let mut state = AppState::new(QueryClient::default(), "test");
        assert!(!SelectHandler.can_handle(&state, &SelectAction::Confirm));
        run(&mut state, SelectAction::Confirm);
    }
}
