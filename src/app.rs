//! Application de démonstration : six widgets de sélection sur la même
//! liste de membres, chacun avec une combinaison d'options différente.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    style::{Modifier, Style},
    text::{Line, Span},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;

use crate::error::Result;
use crate::handler::EventHandler;
use crate::icons::IconType;
use crate::model::Entity;
use crate::source::{EntitySource, QueryClient, QueryOptions};
use crate::state::{AppState, SelectConfig};
use crate::ui::common::style::dim_style;

/// Membres désactivés dans la plupart des widgets de démonstration.
const DEMO_DISABLED: [u64; 2] = [1, 2];

const PLACEHOLDER: &str = "Choisir un membre";

/// Construit l'état de l'application et monte les widgets de démonstration.
pub fn build_state(source: Arc<dyn EntitySource>, options: QueryOptions) -> AppState {
    let mut state = AppState::new(QueryClient::with_options(options), source.describe());
    for config in showcase(&state) {
        state.mount(config, Arc::clone(&source));
    }
    info!("{} widgets montés sur '{}'", state.widgets.len(), source.key());
    state
}

/// Configurations des widgets de démonstration, dans l'ordre de focus.
pub fn showcase(state: &AppState) -> Vec<SelectConfig> {
    let config = |label: &str| SelectConfig::new(label, PLACEHOLDER, state.notifier(label));

    vec![
        config("Membre").sortable(true),
        config("Membre · rendu")
            .icon_type(IconType::UserIcon)
            .disabled_options(DEMO_DISABLED)
            .custom_render(bold_name_with_handle),
        config("Membre · photo")
            .icon_type(IconType::UserImage)
            .disabled_options(DEMO_DISABLED),
        config("Membre · statut")
            .icon_type(IconType::GreenCircle)
            .disabled_options(DEMO_DISABLED),
        config("Membre · recherche")
            .placeholder_icon(true)
            .disabled_options(DEMO_DISABLED),
        config("Équipe")
            .placeholder_icon(true)
            .icon_type(IconType::UserImage)
            .disabled_options(DEMO_DISABLED)
            .multiple(true)
            .filterable(true)
            .sortable(true),
    ]
}

/// Nom en gras suivi du handle.
fn bold_name_with_handle(entity: &Entity) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            entity.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(entity.handle(), dim_style()),
    ])
}

/// Lance l'interface : terminal en mode raw, boucle, puis restauration.
pub fn run(state: AppState) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let mut handler = EventHandler::new(state);
    let result = handler.run(&mut terminal);

    restore_terminal(&mut terminal)?;
    result
}

/// Initialise le terminal en mode raw + alternate screen + souris.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restaure le terminal à son état normal.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
