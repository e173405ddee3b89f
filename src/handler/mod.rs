//! Gestionnaires d'événements et d'actions.
//!
//! Chaque handler spécialisé gère un domaine fonctionnel : le widget qui a
//! le focus clavier d'un côté, les appuis pointeur de l'autre.

pub mod dispatcher;
pub mod pointer;
pub mod select;
pub mod traits;

pub use dispatcher::ActionDispatcher;
pub use pointer::PointerHandler;
pub use select::SelectHandler;
pub use traits::{ActionHandler, HandlerContext};

use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;

use crate::error::Result;
use crate::state::AppState;
use crate::ui;
use crate::ui::input::handle_input_with_timeout;

/// Timeout d'input quand quelque chose s'anime à l'écran.
const ANIMATED_TIMEOUT_MS: u64 = 80;
/// Timeout d'input au repos.
const IDLE_TIMEOUT_MS: u64 = 250;

/// Gestionnaire principal de la boucle événementielle.
pub struct EventHandler {
    state: AppState,
    dispatcher: ActionDispatcher,
}

impl EventHandler {
    /// Crée un nouveau gestionnaire d'événements.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            dispatcher: ActionDispatcher::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Lance la boucle événementielle principale.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            // Résultats des récupérations terminées
            if self.state.sync_sources() {
                debug!("listes de candidats mises à jour");
            }

            // Rendu
            terminal.draw(|frame| {
                ui::render(frame, &mut self.state);
            })?;

            // Input avec timeout adaptatif
            let timeout_ms = if self.state.queries.is_loading() || self.state.flash_message.is_some()
            {
                ANIMATED_TIMEOUT_MS
            } else {
                IDLE_TIMEOUT_MS
            };

            if let Some(action) = handle_input_with_timeout(&self.state, timeout_ms)? {
                self.dispatcher.dispatch(&mut self.state, action)?;
            }

            // Notifications émises par les widgets pendant l'action
            self.state.drain_selection_events();

            if self.state.should_quit {
                break;
            }

            // Vérifier si le message flash a expiré
            self.state.check_flash_expired();
        }
        Ok(())
    }
}
