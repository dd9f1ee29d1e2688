use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::form::field::option_label;

use super::{super::view::PopupRender, layout::popup_rect};

pub fn render_popup(frame: &mut Frame<'_>, popup: &PopupRender<'_>) {
    let longest = popup
        .options
        .iter()
        .map(|option| option_label(option).chars().count())
        .chain(std::iter::once(popup.title.chars().count()))
        .max()
        .unwrap_or(10);
    let area = frame.area();
    let width = (longest as u16 + 8).clamp(20, area.width.saturating_sub(4).max(20));
    let height = (popup.options.len() as u16 + 2).min(area.height.saturating_sub(2).max(3));
    let rect = popup_rect(area, width, height);

    frame.render_widget(Clear, rect);
    let items: Vec<ListItem<'_>> = popup
        .options
        .iter()
        .map(|option| ListItem::new(option_label(option).to_string()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(popup.selected));
    let list = List::new(items)
        .block(
            Block::default()
                .title(popup.title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, rect, &mut state);
}
