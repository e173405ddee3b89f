//! Tests de rendu des composants UI.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::{backend::TestBackend, buffer::Buffer, text::Line, Terminal};

use crate::icons::{IconType, SEARCH_GLYPH};
use crate::model::Entity;
use crate::source::{QueryClient, QuerySnapshot, StaticSource};
use crate::state::{AppState, SelectConfig};

/// Helper pour capturer le rendu d'un composant.
pub fn render_to_string<F>(width: u16, height: u16, render_fn: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            render_fn(frame);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer_to_string(buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

fn roster() -> Vec<Entity> {
    vec![
        Entity::new(1, "Ann", "ann"),
        Entity::new(2, "Bo", "bo"),
        Entity::new(3, "Cy", "cy"),
    ]
}

/// Application montée avec une configuration par widget, données chargées.
fn app(configs: Vec<SelectConfig>) -> AppState {
    let mut state = AppState::new(QueryClient::default(), "mémoire");
    for config in configs {
        state.mount(config, Arc::new(StaticSource::new("users", roster())));
    }
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.queries.is_loading() && Instant::now() < deadline {
        state.sync_sources();
        thread::sleep(Duration::from_millis(5));
    }
    state.sync_sources();
    state
}

fn config(label: &str) -> SelectConfig {
    SelectConfig::new(label, "Choisir un membre", |_: &Entity| {})
}

fn draw(state: &mut AppState) -> String {
    render_to_string(100, 30, |frame| super::render(frame, state))
}

/// Première ligne de l'écran qui contient `needle`.
fn line_with<'a>(screen: &'a str, needle: &str) -> &'a str {
    screen
        .lines()
        .find(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{:?} absent de l'écran", needle))
}

/// Vérifie que le glyphe de recherche précède `text` sur la ligne du déclencheur.
fn assert_search_glyph_before(screen: &str, text: &str) {
    let line = line_with(screen, SEARCH_GLYPH);
    let glyph = line.find(SEARCH_GLYPH).unwrap();
    let target = line
        .find(text)
        .unwrap_or_else(|| panic!("{:?} absent de {:?}", text, line));
    assert!(glyph < target, "{:?}", line);
}

#[test]
fn test_closed_widget_shows_label_and_placeholder() {
    let mut state = app(vec![config("Équipe")]);
    let screen = draw(&mut state);

    assert!(screen.contains(" Équipe "));
    assert!(screen.contains("Choisir un membre"));
    assert!(screen.contains("▾"));
    assert!(!screen.contains("Ann"));
}

#[test]
fn test_open_widget_lists_options() {
    let mut state = app(vec![config("Équipe").icon_type(IconType::GreenCircle)]);
    state.widgets[0].state_mut().toggle_open();
    let screen = draw(&mut state);

    assert!(screen.contains("▴"));
    assert!(screen.contains("● Ann @ann"));
    assert!(screen.contains("● Cy @cy"));
    assert!(screen.contains("3 options"));
    assert_eq!(state.widgets[0].hits().options.len(), 3);
    assert!(state.widgets[0].hits().dropdown.is_some());
}

#[test]
fn test_single_selection_in_trigger_and_check_mark() {
    let mut state = app(vec![config("Équipe")]);
    state.widgets[0]
        .state_mut()
        .select_option(&Entity::new(2, "Bo", "bo"));
    state.widgets[0].state_mut().toggle_open();
    let screen = draw(&mut state);

    assert!(screen.contains("Bo @bo"));
    assert!(screen.contains("✓"));
    assert!(!screen.contains("Choisir un membre"));
}

#[test]
fn test_display_value_overrides_trigger_text() {
    let mut state = app(vec![
        config("Équipe").display_value(|e: &Entity| format!("<{}>", e.username)),
    ]);
    state.widgets[0]
        .state_mut()
        .select_option(&Entity::new(1, "Ann", "ann"));
    let screen = draw(&mut state);
    assert!(screen.contains("<ann>"));
}

#[test]
fn test_multi_chips_record_remove_controls() {
    let mut state = app(vec![config("Équipe").multiple(true)]);
    for id in [1, 3] {
        let entity = roster().into_iter().find(|e| e.id == id).unwrap();
        state.widgets[0].state_mut().select_option(&entity);
    }
    let screen = draw(&mut state);

    assert!(screen.contains(" ann × "));
    assert!(screen.contains(" cy × "));
    let chips: Vec<u64> = state.widgets[0].hits().chips.iter().map(|(_, id)| *id).collect();
    assert_eq!(chips, vec![1, 3]);
}

#[test]
fn test_disabled_widget_records_no_input() {
    let mut state = app(vec![config("Équipe").filterable(true).disabled(true)]);
    let screen = draw(&mut state);

    assert!(screen.contains("Choisir un membre"));
    assert!(state.widgets[0].hits().input.is_none());
    assert!(state.widgets[0].hits().chips.is_empty());
}

#[test]
fn test_filter_without_match_shows_no_results_row() {
    let mut state = app(vec![config("Équipe").filterable(true)]);
    state.widgets[0].state_mut().toggle_open();
    state.widgets[0].state_mut().set_filter("zzz");
    let screen = draw(&mut state);

    assert!(screen.contains("zzz"));
    assert!(screen.contains("Aucun résultat"));
    assert!(state.widgets[0].hits().options.is_empty());
    assert!(state.widgets[0].hits().input.is_some());
}

#[test]
fn test_loading_and_failed_rows() {
    let mut state = AppState::new(QueryClient::default(), "mémoire");
    state.mount(config("Équipe"), Arc::new(StaticSource::new("slow", roster())));
    state.widgets[0]
        .state_mut()
        .sync_source(&QuerySnapshot::loading());
    state.widgets[0].state_mut().toggle_open();
    assert!(draw(&mut state).contains("Chargement…"));

    state.widgets[0]
        .state_mut()
        .sync_source(&QuerySnapshot::failed("hs"));
    assert!(draw(&mut state).contains("Échec du chargement : hs"));
}

#[test]
fn test_help_overlay() {
    let mut state = app(vec![config("Équipe")]);
    state.show_help = true;
    let screen = draw(&mut state);
    assert!(screen.contains(" Aide "));
    assert!(screen.contains("Recharger la liste"));
}

#[test]
fn test_journal_lists_notifications() {
    let mut state = AppState::new(QueryClient::default(), "mémoire");
    let on_select = state.notifier("Équipe");
    state.mount(
        SelectConfig::new("Équipe", "Choisir", on_select),
        Arc::new(StaticSource::new("users", roster())),
    );
    state.widgets[0]
        .state_mut()
        .select_option(&Entity::new(2, "Bo", "bo"));
    state.drain_selection_events();

    let screen = draw(&mut state);
    assert!(screen.contains(" Journal "));
    assert!(screen.contains("Équipe → Bo @bo"));
}

#[test]
fn test_terminal_too_small() {
    let mut state = app(vec![config("Équipe")]);
    let screen = render_to_string(40, 10, |frame| super::render(frame, &mut state));
    assert!(screen.contains("Terminal trop petit"));
    assert_eq!(state.widgets[0].hits().root.area(), 0);
}

#[test]
fn test_search_glyph_before_placeholder() {
    let mut state = app(vec![config("Équipe").placeholder_icon(true)]);
    let screen = draw(&mut state);
    assert_search_glyph_before(&screen, "Choisir un membre");
}

#[test]
fn test_search_glyph_before_single_display() {
    let mut state = app(vec![config("Équipe").placeholder_icon(true)]);
    state.widgets[0]
        .state_mut()
        .select_option(&Entity::new(2, "Bo", "bo"));
    let screen = draw(&mut state);

    assert!(!screen.contains("Choisir un membre"));
    assert_search_glyph_before(&screen, "Bo @bo");
}

#[test]
fn test_search_glyph_before_chips() {
    let mut state = app(vec![config("Équipe")
        .placeholder_icon(true)
        .multiple(true)
        .filterable(true)]);
    for entity in [Entity::new(1, "Ann", "ann"), Entity::new(3, "Cy", "cy")] {
        state.widgets[0].state_mut().select_option(&entity);
    }
    let screen = draw(&mut state);

    assert_search_glyph_before(&screen, " ann × ");
    assert_search_glyph_before(&screen, " cy × ");
}

#[test]
fn test_custom_render_rows_and_display_value_trigger() {
    let mut state = app(vec![config("Équipe")
        .custom_render(|e: &Entity| Line::from(format!("<<{}>>", e.name)))
        .display_value(|e: &Entity| format!("=> {}", e.name))]);
    state.widgets[0]
        .state_mut()
        .select_option(&Entity::new(1, "Ann", "ann"));
    state.widgets[0].state_mut().toggle_open();
    let screen = draw(&mut state);

    // Déclencheur : display_value seul.
    let trigger = line_with(&screen, "=> Ann");
    assert!(!trigger.contains("<<"));

    // Lignes d'options : custom_render l'emporte.
    assert!(line_with(&screen, "<<Ann>>").contains("✓"));
    assert!(screen.contains("<<Bo>>"));
    assert!(!screen.contains("=> Bo"));
    assert!(!screen.contains("Bo @bo"));
}
