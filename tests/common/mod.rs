//! Helpers pour les tests d'intégration.

#![allow(dead_code)]

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use team_picker::handler::ActionDispatcher;
use team_picker::model::Entity;
use team_picker::source::{EntitySource, QueryClient, StaticSource};
use team_picker::state::{AppAction, AppState, SelectConfig};
use team_picker::ui;

/// Liste de deux membres : Ann (1) et Bo (2).
pub fn ann_and_bo() -> Arc<dyn EntitySource> {
    Arc::new(StaticSource::new(
        "users",
        vec![Entity::new(1, "Ann", "ann"), Entity::new(2, "Bo", "bo")],
    ))
}

/// Application avec un seul widget, données chargées.
pub fn single_widget_app(
    source: Arc<dyn EntitySource>,
    build: impl FnOnce(SelectConfig) -> SelectConfig,
) -> AppState {
    let mut state = AppState::new(QueryClient::default(), "test");
    let config = build(SelectConfig::new("Membre", "Choisir", state.notifier("Membre")));
    state.mount(config, source);
    settle(&mut state);
    state
}

/// Attend la fin des récupérations en cours.
pub fn settle(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.queries.is_loading() && Instant::now() < deadline {
        state.sync_sources();
        thread::sleep(Duration::from_millis(5));
    }
    state.sync_sources();
}

/// Dessine l'écran (ce qui relève les zones cliquables) et le retourne en texte.
pub fn draw(state: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

/// Appui souris au coin haut-gauche de `rect`, suivi d'un nouveau rendu.
pub fn click(state: &mut AppState, rect: Rect) {
    dispatch(
        state,
        AppAction::PointerDown {
            column: rect.x,
            row: rect.y,
        },
    );
}

/// Envoie une action comme le ferait la boucle, puis redessine.
pub fn dispatch(state: &mut AppState, action: AppAction) {
    ActionDispatcher::new().dispatch(state, action).unwrap();
    state.drain_selection_events();
    draw(state);
}

/// Zone de la ligne d'option qui affiche l'entité `id`.
pub fn option_rect(state: &AppState, widget: usize, id: u64) -> Rect {
    let widget = &state.widgets[widget];
    widget
        .hits()
        .options
        .iter()
        .find(|(_, index)| widget.state().view().get(*index).map(|e| e.id) == Some(id))
        .map(|(rect, _)| *rect)
        .unwrap_or_else(|| panic!("option {} absente de la liste affichée", id))
}

/// Un point de la barre d'aide, qu'aucun widget ne couvre.
pub const BLANK_SPOT: Rect = Rect::new(99, 29, 1, 1);

/// Identifiants sélectionnés du widget.
pub fn selected_ids(state: &AppState, widget: usize) -> Vec<u64> {
    state.widgets[widget].state().selected().ids()
}
