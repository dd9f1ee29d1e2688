use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{domain::EditorKind, form::FieldView};

use super::{
    super::view::{Focus, UiContext},
    layout::chunk_by_width,
};

const HIGHLIGHT_SYMBOL: &str = "» ";
// "│ " on the left of the value box.
const BOX_PREFIX_WIDTH: u16 = 2;

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    column: u16,
}

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>, enable_cursor: bool) {
    let block = Block::default().title("Fields").borders(Borders::ALL);
    if ctx.fields.is_empty() {
        let placeholder = Paragraph::new("This form has no fields.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let selected = match ctx.focus {
        Focus::Field(index) if index < ctx.fields.len() => Some(index),
        _ => None,
    };
    let content_width = area
        .width
        .saturating_sub(2 + HIGHLIGHT_SYMBOL.width() as u16)
        .max(8) as usize;

    let renders: Vec<FieldRender> = ctx
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| build_field_render(field, Some(index) == selected, content_width))
        .collect();
    let heights: Vec<usize> = renders.iter().map(|render| render.lines.len()).collect();
    let cursor = selected.and_then(|index| {
        renders[index]
            .cursor
            .as_ref()
            .map(|hint| (index, hint.line_offset, hint.column))
    });

    let items: Vec<ListItem<'static>> = renders
        .into_iter()
        .map(|render| ListItem::new(render.lines))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(selected);

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, area, &mut list_state);

    if !enable_cursor {
        return;
    }
    if let Some((index, line_offset, column)) = cursor {
        let offset = list_state.offset();
        if index < offset {
            return;
        }
        let row = heights[offset..index].iter().sum::<usize>() + line_offset;
        let inner_height = area.height.saturating_sub(2) as usize;
        if row >= inner_height {
            return;
        }
        let x = area.x + 1 + HIGHLIGHT_SYMBOL.width() as u16 + BOX_PREFIX_WIDTH + column;
        let y = area.y + 1 + row as u16;
        if x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn build_field_render(field: &FieldView, is_selected: bool, width: usize) -> FieldRender {
    let mut lines = Vec::new();
    lines.push(label_line(field, is_selected));

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let inner_width = width.saturating_sub(4).max(4);
    let horizontal = "─".repeat(inner_width + 2);

    lines.push(Line::from(Span::styled(format!("┌{horizontal}┐"), border_style)));
    let mut last_width = 0usize;
    for raw in &field.lines {
        for chunk in chunk_by_width(raw, inner_width) {
            last_width = chunk.width();
            let padding = " ".repeat(inner_width.saturating_sub(last_width));
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::raw(chunk),
                Span::raw(padding),
                Span::styled(" │", border_style),
            ]));
        }
    }
    let last_value_line = lines.len() - 1;
    lines.push(Line::from(Span::styled(format!("└{horizontal}┘"), border_style)));

    if is_selected && field.editor == EditorKind::Dropdown {
        lines.push(Line::from(Span::styled(
            "  ←/→ to change, Enter for the list",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(error) = &field.error {
        lines.extend(error_lines(error, width));
    }
    lines.push(Line::from(""));

    let cursor = (is_selected && field.editor != EditorKind::Dropdown).then(|| CursorHint {
        line_offset: last_value_line,
        column: last_width.min(inner_width) as u16,
    });
    FieldRender { lines, cursor }
}

fn label_line(field: &FieldView, is_selected: bool) -> Line<'static> {
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![Span::styled(field.label.clone(), label_style)];
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn error_lines(message: &str, width: usize) -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Red);
    let indent = "    ";
    let wrap_width = width.saturating_sub(indent.len()).max(8);
    let mut lines = vec![Line::from(Span::styled(
        "  Error:",
        style.add_modifier(Modifier::BOLD),
    ))];
    for segment in wrap(message, wrap_width) {
        lines.push(Line::from(Span::styled(format!("{indent}{segment}"), style)));
    }
    lines
}
