//! Rendu d'un widget de sélection : cadre et déclencheur, puis liste
//! déroulante dessinée par-dessus le reste de l'écran.
//!
//! Chaque passe relève ses zones cliquables dans un [`HitMap`].

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::icons::{CHECK_GLYPH, CHEVRON_DOWN, CHEVRON_UP, REMOVE_GLYPH, SEARCH_GLYPH};
use crate::model::Entity;
use crate::state::{HitMap, ListStatus, SelectState, SelectWidget};
use crate::ui::common::style::{
    chip_style, dim_style, disabled_style, error_style, highlight_style, success_style,
};
use crate::ui::common::StyledBlock;
use crate::ui::loading::LoadingSpinner;
use crate::ui::theme::current_theme;

/// Hauteur d'un widget fermé (cadre compris).
pub const WIDGET_HEIGHT: u16 = 3;

/// Nombre maximum de lignes d'options visibles.
pub const MAX_DROPDOWN_ROWS: u16 = 8;

/// Texte de la ligne affichée quand la vue est vide.
pub const NO_RESULTS: &str = "Aucun résultat";

/// Texte de la ligne affichée pendant le premier chargement.
pub const LOADING: &str = "Chargement…";

/// Curseur du champ de filtre actif.
const INPUT_CURSOR: &str = "▏";

/// Accumule des spans sur une ligne en suivant la colonne courante.
struct LineCursor {
    area: Rect,
    x: u16,
    spans: Vec<Span<'static>>,
}

impl LineCursor {
    fn new(area: Rect) -> Self {
        Self {
            area,
            x: area.x,
            spans: Vec::new(),
        }
    }

    fn remaining(&self) -> u16 {
        self.area.right().saturating_sub(self.x)
    }

    /// Ajoute un span et retourne la zone qu'il occupe.
    fn push(&mut self, span: Span<'static>) -> Rect {
        let width = u16::try_from(span.width())
            .unwrap_or(u16::MAX)
            .min(self.remaining());
        let rect = Rect::new(self.x, self.area.y, width, 1);
        self.x += width;
        self.spans.push(span);
        rect
    }

    /// Zone restante jusqu'au bout de la ligne.
    fn rest(&self) -> Rect {
        Rect::new(self.x, self.area.y, self.remaining(), 1)
    }

    fn into_line(self) -> Line<'static> {
        Line::from(self.spans)
    }
}

/// Dessine le cadre du widget et son déclencheur.
pub fn render_trigger(
    frame: &mut Frame,
    widget: &SelectWidget,
    area: Rect,
    focused: bool,
) -> HitMap {
    let state = widget.state();
    let config = state.config();
    let disabled = config.is_disabled();

    let block = StyledBlock::new(config.label())
        .focused(focused)
        .disabled(disabled)
        .build();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut hits = HitMap {
        root: area,
        trigger: inner,
        ..HitMap::default()
    };
    if inner.width < 3 || inner.height == 0 {
        return hits;
    }

    // Le chevron occupe les deux dernières colonnes.
    let content = Rect::new(inner.x, inner.y, inner.width - 2, 1);
    let mut line = LineCursor::new(content);

    if config.has_placeholder_icon() {
        line.push(Span::styled(format!("{} ", SEARCH_GLYPH), dim_style()));
    }

    let selected = state.selected();
    if config.is_multiple() {
        for (i, entity) in selected.iter().enumerate() {
            let spans = chip_spans(state, entity);
            let width: usize = spans.iter().map(Span::width).sum::<usize>() + 2;
            if width > usize::from(line.remaining()) {
                line.push(Span::styled(format!("+{}", selected.len() - i), dim_style()));
                break;
            }
            for span in spans {
                line.push(span);
            }
            let remove = line.push(Span::styled(
                REMOVE_GLYPH,
                chip_style().add_modifier(Modifier::BOLD),
            ));
            if !disabled {
                hits.chips.push((remove, entity.id));
            }
            line.push(Span::raw(" "));
        }
    } else if let Some(entity) = selected.first() {
        if let Some(icon) = state.icons().span_for(config.icon()) {
            line.push(icon);
            line.push(Span::raw(" "));
        }
        let text = config
            .render_display_value(entity)
            .unwrap_or_else(|| format!("{} {}", entity.name, entity.handle()));
        line.push(Span::styled(
            text,
            Style::default().fg(current_theme().text_normal),
        ));
        line.push(Span::raw(" "));
    }

    if config.is_filterable() {
        let input = line.rest();
        if state.filter().is_empty() && selected.is_empty() {
            line.push(Span::styled(config.placeholder().to_string(), dim_style()));
        } else {
            line.push(Span::raw(state.filter().to_string()));
        }
        if focused && state.is_open() {
            line.push(Span::styled(
                INPUT_CURSOR,
                Style::default().fg(current_theme().primary),
            ));
        }
        if !disabled && input.width > 0 {
            hits.input = Some(input);
        }
    } else if selected.is_empty() {
        line.push(Span::styled(config.placeholder().to_string(), dim_style()));
    }

    let mut trigger_line = line.into_line();
    if disabled {
        trigger_line = trigger_line.patch_style(disabled_style());
    }
    frame.render_widget(Paragraph::new(trigger_line), content);

    let chevron = if state.is_open() { CHEVRON_UP } else { CHEVRON_DOWN };
    let chevron_style = if disabled {
        disabled_style()
    } else {
        Style::default().fg(current_theme().primary)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(chevron, chevron_style)),
        Rect::new(inner.right() - 1, inner.y, 1, 1),
    );

    hits
}

/// Corps d'une puce : icône, identifiant, espace avant le contrôle de retrait.
fn chip_spans(state: &SelectState, entity: &Entity) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(3);
    if let Some(icon) = state.icons().span_for(state.config().icon()) {
        spans.push(icon.patch_style(chip_style()));
    }
    spans.push(Span::styled(format!(" {} ", entity.username), chip_style()));
    spans
}

/// Dessine la liste déroulante d'un widget ouvert, sous son cadre si la place
/// le permet, au-dessus sinon.
pub fn render_dropdown(
    frame: &mut Frame,
    widget: &mut SelectWidget,
    anchor: Rect,
    bounds: Rect,
    focused: bool,
    spinner: &LoadingSpinner,
    hits: &mut HitMap,
) {
    if !widget.state().is_open() {
        return;
    }

    let status = widget.state().list_status();
    let rows = match status {
        ListStatus::Ready => u16::try_from(widget.state().view().len())
            .unwrap_or(u16::MAX)
            .min(MAX_DROPDOWN_ROWS),
        _ => 1,
    };
    let Some(area) = dropdown_area(anchor, bounds, rows + 2) else {
        return;
    };

    let block = StyledBlock::new(dropdown_title(widget.state()))
        .focused(focused)
        .build();
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    hits.dropdown = Some(area);

    widget.state_mut().set_visible_rows(inner.height as usize);
    let state = widget.state();

    match status {
        ListStatus::Ready => {
            let cursor = state.view().cursor();
            for (row, (index, entity)) in state.view().visible_items().enumerate() {
                let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
                let line = option_line(state, entity, focused && index == cursor, inner.width);
                frame.render_widget(Paragraph::new(line), rect);
                hits.options.push((rect, index));
            }
        }
        ListStatus::Loading => {
            frame.render_widget(Paragraph::new(spinner.line(LOADING)), inner);
        }
        ListStatus::Failed => {
            let message = state.source().error.as_deref().unwrap_or_default();
            let line = Line::styled(format!("Échec du chargement : {}", message), error_style());
            frame.render_widget(Paragraph::new(line), inner);
        }
        ListStatus::Empty => {
            frame.render_widget(
                Paragraph::new(Line::styled(NO_RESULTS, dim_style())),
                inner,
            );
        }
    }
}

fn dropdown_title(state: &SelectState) -> String {
    let count = state.view().len();
    match count {
        0 => String::new(),
        1 => "1 option".to_string(),
        n => format!("{} options", n),
    }
}

/// Place la liste sous l'ancre, ou au-dessus quand il y a plus de place.
fn dropdown_area(anchor: Rect, bounds: Rect, wanted: u16) -> Option<Rect> {
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(bounds.y);

    let (y, height) = if below >= wanted || below >= above {
        (anchor.bottom(), wanted.min(below))
    } else {
        let height = wanted.min(above);
        (anchor.y - height, height)
    };

    if height < 3 {
        return None;
    }
    Some(Rect::new(anchor.x, y, anchor.width, height))
}

/// Ligne d'une option : icône, corps, coche à droite.
fn option_line(
    state: &SelectState,
    entity: &Entity,
    highlighted: bool,
    width: u16,
) -> Line<'static> {
    let config = state.config();
    let mut spans = Vec::new();

    spans.push(Span::raw(" "));
    if let Some(icon) = state.icons().span_for(config.icon()) {
        spans.push(icon);
        spans.push(Span::raw(" "));
    }

    if let Some(custom) = config.render_custom(entity) {
        spans.extend(custom.spans);
    } else if let Some(text) = config.render_display_value(entity) {
        spans.push(Span::raw(text));
    } else {
        spans.push(Span::raw(entity.name.clone()));
        spans.push(Span::styled(format!(" {}", entity.handle()), dim_style()));
    }

    if state.is_selected(entity.id) {
        let used: usize = spans.iter().map(Span::width).sum();
        let pad = (width as usize).saturating_sub(used + 2);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(CHECK_GLYPH, success_style()));
    }

    let mut line = Line::from(spans);
    if state.is_option_inert(entity.id) {
        line = line.patch_style(disabled_style().add_modifier(Modifier::CROSSED_OUT));
    }
    if highlighted {
        line = line.patch_style(highlight_style());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_span_is_clamped_to_line() {
        let mut line = LineCursor::new(Rect::new(2, 1, 20, 1));
        let rect = line.push(Span::raw("x".repeat(65_540)));
        assert_eq!(rect, Rect::new(2, 1, 20, 1));
        assert_eq!(line.remaining(), 0);
        assert_eq!(line.push(Span::raw("y")).width, 0);
    }

    #[test]
    fn test_dropdown_below_when_room() {
        let anchor = Rect::new(0, 2, 20, 3);
        let bounds = Rect::new(0, 0, 80, 30);
        assert_eq!(
            dropdown_area(anchor, bounds, 6),
            Some(Rect::new(0, 5, 20, 6))
        );
    }

    #[test]
    fn test_dropdown_flips_above() {
        let anchor = Rect::new(0, 20, 20, 3);
        let bounds = Rect::new(0, 0, 80, 25);
        assert_eq!(
            dropdown_area(anchor, bounds, 10),
            Some(Rect::new(0, 10, 20, 10))
        );
    }

    #[test]
    fn test_dropdown_clamped() {
        let anchor = Rect::new(0, 0, 20, 3);
        let bounds = Rect::new(0, 0, 80, 8);
        assert_eq!(dropdown_area(anchor, bounds, 10), Some(Rect::new(0, 3, 20, 5)));

        let cramped = Rect::new(0, 0, 80, 4);
        assert_eq!(dropdown_area(anchor, cramped, 10), None);
    }
}
