use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::{FieldView, FormPhase};

use super::components::{
    header_height, render_actions, render_fields, render_footer, render_header, render_popup,
};

/// Which stop of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Submit,
}

pub struct UiContext<'a> {
    pub title: &'a str,
    pub intro: Option<&'a str>,
    pub fields: Vec<FieldView>,
    pub focus: Focus,
    pub phase: FormPhase,
    pub submit_enabled: bool,
    pub status_message: &'a str,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(&ctx, area.width)),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

    let cursor_enabled = ctx.popup.is_none();
    render_header(frame, chunks[0], &ctx);
    render_fields(frame, chunks[1], &ctx, cursor_enabled);
    render_actions(frame, chunks[2], &ctx);
    render_footer(frame, chunks[3], &ctx);

    if let Some(popup) = &ctx.popup {
        render_popup(frame, popup);
    }
}
