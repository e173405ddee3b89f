use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::select_view::WIDGET_HEIGHT;

/// Colonnes de la grille de widgets.
pub const GRID_COLUMNS: u16 = 2;

/// Zones de l'écran principal.
#[derive(Debug, Clone, PartialEq)]
pub struct AppLayout {
    pub status_bar: Rect,
    /// Zone commune aux widgets et au journal (bornes des listes déroulantes).
    pub body: Rect,
    /// Un cadre par widget ; ceux qui ne tiennent pas à l'écran n'en ont pas.
    pub widgets: Vec<Rect>,
    pub journal: Rect,
    pub help_bar: Rect,
}

/// Construit le layout principal de l'application.
///
/// Disposition :
/// ┌──────────────────────────────────────┐
/// │ barre d'état                         │
/// ├──────────────────────────┬───────────┤
/// │ widget 1     widget 2    │ journal   │
/// │ widget 3     widget 4    │           │
/// ├──────────────────────────┴───────────┤
/// │ barre d'aide                         │
/// └──────────────────────────────────────┘
pub fn build_layout(area: Rect, widget_count: usize) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let body = main_chunks[1];
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(body);

    AppLayout {
        status_bar: main_chunks[0],
        body,
        widgets: grid_cells(body_chunks[0], widget_count),
        journal: body_chunks[1],
        help_bar: main_chunks[2],
    }
}

/// Place les widgets en grille, une ligne vide entre deux rangées.
fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    let column_width = area.width / GRID_COLUMNS;
    let row_height = WIDGET_HEIGHT + 1;

    (0..count)
        .map(|i| {
            let column = i as u16 % GRID_COLUMNS;
            let row = i as u16 / GRID_COLUMNS;
            Rect::new(
                area.x + column * column_width,
                area.y + 1 + row * row_height,
                column_width.saturating_sub(1),
                WIDGET_HEIGHT,
            )
        })
        .take_while(|cell| cell.bottom() <= area.bottom())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = build_layout(Rect::new(0, 0, 100, 30), 6);
        assert_eq!(layout.status_bar, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.help_bar, Rect::new(0, 28, 100, 2));
        assert_eq!(layout.body.height, 27);
        assert_eq!(layout.widgets.len(), 6);
        assert_eq!(layout.widgets[0], Rect::new(0, 2, 33, 3));
        assert_eq!(layout.widgets[3], Rect::new(34, 6, 33, 3));
    }

    #[test]
    fn test_cells_that_do_not_fit_are_dropped() {
        let layout = build_layout(Rect::new(0, 0, 100, 12), 6);
        // Corps de 9 lignes : deux rangées seulement.
        assert_eq!(layout.widgets.len(), 4);
    }
}
