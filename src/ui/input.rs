use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use crate::state::{AppAction, AppState, SelectAction};

/// Poll un événement et retourne l'action correspondante.
pub fn handle_input_with_timeout(
    state: &AppState,
    timeout_ms: u64,
) -> std::io::Result<Option<AppAction>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        return Ok(map_event(event::read()?, state));
    }
    Ok(None)
}

/// Mappe un événement terminal à une action de l'application.
pub fn map_event(event: Event, state: &AppState) -> Option<AppAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, state),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<AppAction> {
    match mouse.kind {
        // Tout bouton compte comme un appui, comme un `mousedown`.
        MouseEventKind::Down(_) => Some(AppAction::PointerDown {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(AppAction::Select(SelectAction::CursorUp)),
        MouseEventKind::ScrollDown => Some(AppAction::Select(SelectAction::CursorDown)),
        _ => None,
    }
}

/// Mappe un événement clavier à une action de l'application.
fn map_key(key: KeyEvent, state: &AppState) -> Option<AppAction> {
    // Ctrl+C quitte toujours.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppAction::Quit);
    }

    // L'overlay d'aide capture tout.
    if state.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(AppAction::ToggleHelp),
            _ => None,
        };
    }

    let focused = state.focused_widget().map(|w| w.state());
    let open = focused.is_some_and(|s| s.is_open());
    let typing = focused.is_some_and(|s| s.accepts_text());

    let select = |action| Some(AppAction::Select(action));

    match key.code {
        KeyCode::Tab => Some(AppAction::FocusNext),
        KeyCode::BackTab => Some(AppAction::FocusPrevious),
        KeyCode::Esc => select(SelectAction::Close),
        KeyCode::Enter => select(SelectAction::Confirm),
        KeyCode::Up => select(SelectAction::CursorUp),
        KeyCode::Down => select(SelectAction::CursorDown),
        KeyCode::Home => select(SelectAction::CursorFirst),
        KeyCode::End => select(SelectAction::CursorLast),
        KeyCode::Backspace => select(SelectAction::DeleteChar),
        KeyCode::Delete => select(SelectAction::RemoveLast),

        // Saisie du filtre : tous les caractères vont au champ.
        KeyCode::Char(c) if typing => select(SelectAction::InsertChar(c)),

        KeyCode::Char(' ') => select(SelectAction::Confirm),
        KeyCode::Char('j') if open => select(SelectAction::CursorDown),
        KeyCode::Char('k') if open => select(SelectAction::CursorUp),
        KeyCode::Char('q') => Some(AppAction::Quit),
        KeyCode::Char('?') => Some(AppAction::ToggleHelp),
        KeyCode::Char('r') => Some(AppAction::Refresh),
        KeyCode::Char('y') => Some(AppAction::CopySelection),
        _ => None,
    }
}
