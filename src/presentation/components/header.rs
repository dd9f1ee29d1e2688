use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;

use super::super::view::UiContext;

const MAX_INTRO_LINES: usize = 3;

pub fn header_height(ctx: &UiContext<'_>, width: u16) -> u16 {
    let lines = ctx
        .intro
        .map(|intro| intro_lines(intro, width).len())
        .unwrap_or(1);
    lines.clamp(1, MAX_INTRO_LINES) as u16 + 2
}

pub fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let title = Span::styled(
        format!(" {} ", ctx.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let lines: Vec<Line<'static>> = match ctx.intro {
        Some(intro) => intro_lines(intro, area.width)
            .into_iter()
            .take(MAX_INTRO_LINES)
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Cyan))))
            .collect(),
        None => vec![Line::from(Span::styled(
            "Fill in the fields below.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn intro_lines(intro: &str, width: u16) -> Vec<String> {
    let text_width = width.saturating_sub(4).max(8) as usize;
    wrap(&format!("ℹ {intro}"), text_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
