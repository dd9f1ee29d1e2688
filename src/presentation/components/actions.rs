use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::FormPhase;

use super::super::view::{Focus, UiContext};

pub const SUCCESS_BANNER: &str = "The form was successfully submitted.";
pub const FAILURE_BANNER: &str = "Sorry, an unexpected error has occurred";
pub const INVALID_BANNER: &str = "Sorry the form is invalid. Please review, adjust and try again";

pub fn render_actions(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let focused = ctx.focus == Focus::Submit;
    let (label, style) = if ctx.phase == FormPhase::Submitting {
        (
            "[ Submitting… ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if !ctx.submit_enabled {
        (
            "[ Submit ]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    } else if focused {
        (
            "[ Submit ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "[ Submit ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![Span::styled(label, style)];
    if let Some((banner, color)) = banner_for(ctx.phase) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            banner,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn banner_for(phase: FormPhase) -> Option<(&'static str, Color)> {
    match phase {
        FormPhase::Succeeded => Some((SUCCESS_BANNER, Color::Green)),
        FormPhase::Failed => Some((FAILURE_BANNER, Color::Red)),
        FormPhase::Invalid => Some((INVALID_BANNER, Color::Red)),
        FormPhase::Unsubmitted | FormPhase::Submitting => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_follow_the_phase() {
        assert_eq!(banner_for(FormPhase::Unsubmitted), None);
        assert_eq!(banner_for(FormPhase::Submitting), None);
        assert_eq!(
            banner_for(FormPhase::Succeeded).map(|(text, _)| text),
            Some(SUCCESS_BANNER)
        );
        assert_eq!(
            banner_for(FormPhase::Failed).map(|(text, _)| text),
            Some(FAILURE_BANNER)
        );
        assert_eq!(
            banner_for(FormPhase::Invalid).map(|(text, _)| text),
            Some(INVALID_BANNER)
        );
    }
}
