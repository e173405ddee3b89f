//! Indicateur de chargement (spinner).

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

use crate::ui::theme::current_theme;

/// Caractères du spinner (animation circulaire).
const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Intervalle entre chaque frame du spinner.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner dont la frame dépend du temps écoulé depuis sa création.
#[derive(Debug, Clone, Copy)]
pub struct LoadingSpinner {
    start_time: Instant,
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Index de frame pour un temps écoulé donné.
    pub fn frame_at(elapsed: Duration) -> usize {
        (elapsed.as_millis() / SPINNER_INTERVAL.as_millis()) as usize % SPINNER_CHARS.len()
    }

    /// Caractère du spinner actuel.
    pub fn current_char(&self) -> &'static str {
        SPINNER_CHARS[Self::frame_at(self.start_time.elapsed())]
    }

    /// Ligne « spinner + message ».
    pub fn line(&self, message: impl Into<String>) -> Line<'static> {
        let theme = current_theme();
        Line::from(vec![
            Span::styled(
                self.current_char(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(message.into(), Style::default().fg(theme.text_secondary)),
        ])
    }
}
