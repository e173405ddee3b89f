//! Panneau des dernières sélections notifiées.

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use crate::state::SelectionEvent;
use crate::ui::common::style::{dim_style, title_style};
use crate::ui::common::StyledList;

pub fn render(frame: &mut Frame, journal: &VecDeque<SelectionEvent>, area: Rect) {
    let items = journal
        .iter()
        .map(|event| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", event.widget), title_style()),
                Span::raw(format!("→ {} ", event.entity.name)),
                Span::styled(event.entity.handle(), dim_style()),
            ]))
        })
        .collect();

    StyledList::new("Journal")
        .items(items)
        .empty_hint("Aucune sélection")
        .render(frame, area);
}
