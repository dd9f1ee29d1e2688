use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut lines = Vec::new();
    if let Some(help) = ctx.help {
        lines.push(Line::from(vec![
            Span::styled(
                "Actions: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(help.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }

    let badge = if ctx.error_count > 0 {
        Span::styled(
            format!("[! {}] ", ctx.error_count),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ok] ", Style::default().fg(Color::Green))
    };
    lines.push(Line::from(vec![
        Span::styled(
            "Status: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        badge,
        Span::raw(ctx.status_message.to_string()),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}
