//! Dispatcher principal pour router les actions vers les handlers appropriés.

use log::{info, warn};
use ratatui::layout::Position;

use crate::error::{PickerError, Result};
use crate::error_display::{format_error_message, format_info_message, format_success_message};
use crate::state::{AppAction, AppState};

use super::pointer::PointerHandler;
use super::select::SelectHandler;
use super::traits::{ActionHandler, HandlerContext};

/// Dispatcher qui route les actions vers les handlers appropriés.
pub struct ActionDispatcher {
    select: SelectHandler,
    pointer: PointerHandler,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionDispatcher {
    /// Crée un nouveau dispatcher avec tous les handlers initialisés.
    pub fn new() -> Self {
        Self {
            select: SelectHandler,
            pointer: PointerHandler,
        }
    }

    /// Dispatche une action vers le handler approprié.
    pub fn dispatch(&mut self, state: &mut AppState, action: AppAction) -> Result<()> {
        let mut ctx = HandlerContext { state };

        match action {
            AppAction::Select(select) => {
                if self.select.can_handle(ctx.state, &select) {
                    self.select.handle(&mut ctx, select)?;
                }
                Ok(())
            }

            AppAction::PointerDown { column, row } => self
                .pointer
                .handle(&mut ctx, Position::new(column, row)),

            AppAction::Quit => {
                ctx.state.should_quit = true;
                Ok(())
            }

            AppAction::Refresh => {
                info!("rechargement demandé");
                ctx.state.queries.refetch_all();
                ctx.state
                    .set_flash_message(format_info_message("Rechargement de la liste…"));
                Ok(())
            }

            AppAction::ToggleHelp => {
                ctx.state.show_help = !ctx.state.show_help;
                Ok(())
            }

            AppAction::FocusNext => {
                ctx.state.focus_next();
                Ok(())
            }

            AppAction::FocusPrevious => {
                ctx.state.focus_prev();
                Ok(())
            }

            AppAction::CopySelection => {
                self.handle_copy_selection(&mut ctx);
                Ok(())
            }
        }
    }

    /// Copie la sélection du widget courant ; un échec devient un message flash.
    fn handle_copy_selection(&self, ctx: &mut HandlerContext) {
        let text = selection_text(ctx.state);
        if text.is_empty() {
            ctx.state
                .set_flash_message(format_info_message("Rien à copier"));
            return;
        }

        match copy_to_clipboard(&text) {
            Ok(()) => {
                let count = text.lines().count();
                ctx.state.set_flash_message(format_success_message(&format!(
                    "{} entrée(s) copiée(s)",
                    count
                )));
            }
            Err(e) => {
                warn!("copie impossible : {}", e);
                ctx.state.set_flash_message(format_error_message(&e));
            }
        }
    }
}

/// Texte copié : une ligne `nom <@identifiant>` par entité choisie.
pub fn selection_text(state: &AppState) -> String {
    state
        .focused_widget()
        .map(|widget| {
            widget
                .state()
                .selected()
                .iter()
                .map(|entity| format!("{} <{}>", entity.name, entity.handle()))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

/// Copie le texte dans le clipboard système.
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PickerError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| PickerError::Clipboard(e.to_string()))?;
    Ok(())
}
