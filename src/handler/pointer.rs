//! Handler pour les appuis souris.

use log::trace;
use ratatui::layout::Position;

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::AppState;

/// Diffuse l'appui à tous les widgets, puis le livre à celui qui est visé.
pub struct PointerHandler;

impl ActionHandler for PointerHandler {
    type Action = Position;

    fn handle(&mut self, ctx: &mut HandlerContext, position: Position) -> Result<()> {
        let state = &mut *ctx.state;

        // Chaque widget voit l'appui ; ceux qu'il ne touche pas se referment.
        state.pointer_bus.pointer_down(position);
        state.process_pointer_events();

        let Some(index) = target_widget(state, position) else {
            return Ok(());
        };
        state.set_focus(index);
        let hit = state.widgets[index].click(position);
        trace!("appui {:?} sur le widget {} : {:?}", position, index, hit);
        Ok(())
    }
}

/// Widget visé : une liste ouverte passe avant les cadres qu'elle recouvre.
fn target_widget(state: &AppState, position: Position) -> Option<usize> {
    state
        .widgets
        .iter()
        .position(|w| {
            w.state().is_open() && w.hits().dropdown.is_some_and(|d| d.contains(position))
        })
        .or_else(|| {
            state
                .widgets
                .iter()
                .position(|w| w.hits().root.contains(position))
        })
}
