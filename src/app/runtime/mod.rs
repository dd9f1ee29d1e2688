use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    domain::EditorKind,
    form::{Field, Form, FormReport, SubmitStart, SubmitState},
    presentation::{self, Focus, UiContext},
    submit::{Transport, TransportError, TransportResponse},
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    popup::DropdownPopup,
    status::StatusLine,
    terminal::TerminalGuard,
};

mod submission;

use submission::PendingSubmission;

pub(crate) struct App {
    form: Form,
    title: String,
    intro: Option<String>,
    options: UiOptions,
    transport: Arc<dyn Transport>,
    status: StatusLine,
    /// Index into the fields; `fields().len()` is the submit button.
    focus: usize,
    popup: Option<DropdownPopup>,
    pending: Option<PendingSubmission>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(form: Form, transport: Arc<dyn Transport>, options: UiOptions) -> Self {
        Self {
            form,
            title: String::new(),
            intro: None,
            options,
            transport,
            status: StatusLine::new(),
            focus: 0,
            popup: None,
            pending: None,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_intro(mut self, intro: Option<String>) -> Self {
        self.intro = intro;
        self
    }

    pub fn run(&mut self) -> Result<FormReport> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.poll_submission();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.form.state().report())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        presentation::draw(frame, self.ui_context());
    }

    pub(crate) fn ui_context(&self) -> UiContext<'_> {
        let fields = self
            .form
            .fields()
            .iter()
            .map(|descriptor| Field::new(descriptor).view(&self.form))
            .collect();
        let focus = if self.focus < self.form.fields().len() {
            Focus::Field(self.focus)
        } else {
            Focus::Submit
        };
        UiContext {
            title: &self.title,
            intro: self.intro.as_deref(),
            fields,
            focus,
            phase: self.form.state().phase(),
            submit_enabled: self.form.can_submit(),
            status_message: self.status.message(),
            error_count: self.form.state().error_count(),
            help: self.options.show_help.then_some(HELP_TEXT),
            popup: self.popup.as_ref().map(DropdownPopup::as_render),
        }
    }

    fn focused_field(&self) -> Option<Field<'_>> {
        self.form.fields().get(self.focus).map(Field::new)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(&key) {
            return;
        }

        let focused = self.focused_field().map(|field| field.descriptor().editor);
        let command = classify(&key, focused);
        if command != KeyCommand::Quit {
            self.exit_armed = false;
        }
        match command {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => self.move_focus(1),
            KeyCommand::PrevField => self.move_focus(-1),
            KeyCommand::ResetStatus => self.status.ready(),
            KeyCommand::Activate => self.on_activate(key),
            KeyCommand::Edit(event) => self.edit_focused(&event),
            KeyCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self, key: &KeyEvent) -> bool {
        let Some(popup) = self.popup.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up | KeyCode::Left => popup.select_previous(),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => popup.select_next(),
            KeyCode::Enter => {
                let field_id = popup.field_id.clone();
                let selected = popup.selected();
                self.popup = None;
                if let Some(descriptor) = self.form.field(&field_id).cloned()
                    && Field::new(&descriptor).choose(&mut self.form, selected)
                {
                    self.status.value_updated();
                }
            }
            _ => {}
        }
        true
    }

    fn on_activate(&mut self, key: KeyEvent) {
        let Some(field) = self.focused_field() else {
            self.on_submit();
            return;
        };
        let editor = field.descriptor().editor;
        match editor {
            EditorKind::MultilineTextBox => self.edit_focused(&key),
            EditorKind::Dropdown => self.open_popup(),
            EditorKind::TextBox => self.move_focus(1),
        }
    }

    fn open_popup(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some((options, selected)) = field.choices(&self.form) else {
            return;
        };
        let popup = DropdownPopup::new(
            field.id(),
            field.descriptor().display_label(),
            options,
            selected,
        );
        if popup.is_some() {
            self.status.set_raw("Use ↑/↓ and Enter to choose");
            self.popup = popup;
        }
    }

    fn edit_focused(&mut self, key: &KeyEvent) {
        let Some(descriptor) = self.form.fields().get(self.focus).cloned() else {
            return;
        };
        if Field::new(&descriptor).handle_key(&mut self.form, key) {
            self.status.editing(&descriptor.display_label());
        }
    }

    /// Moves focus, validating the field being left.
    fn move_focus(&mut self, delta: i32) {
        self.blur_focused();
        let stops = self.form.fields().len() as i32 + 1;
        let next = (self.focus as i32 + delta).rem_euclid(stops);
        self.focus = next as usize;
    }

    fn blur_focused(&mut self) {
        if let Some(descriptor) = self.form.fields().get(self.focus).cloned() {
            Field::new(&descriptor).blur(&mut self.form);
        }
    }

    fn on_submit(&mut self) {
        self.blur_focused();
        if self.form.state().submit_state() == SubmitState::Submitting {
            self.status.still_submitting();
            return;
        }
        if !self.form.can_submit() {
            self.status.submit_blocked();
            return;
        }
        match self.form.begin_submit() {
            SubmitStart::Ready(request) => {
                self.status.submitting(&request.url);
                match PendingSubmission::spawn(Arc::clone(&self.transport), request) {
                    Ok(pending) => self.pending = Some(pending),
                    Err(err) => {
                        self.form.complete_submit(Err(err));
                        self.status.submit_failed();
                    }
                }
            }
            SubmitStart::Invalid => {
                self.status
                    .issues_remaining(self.form.state().error_count());
                self.focus_first_error();
            }
            SubmitStart::InFlight => self.status.still_submitting(),
        }
    }

    fn focus_first_error(&mut self) {
        let state = self.form.state();
        if let Some(index) = self
            .form
            .fields()
            .iter()
            .position(|field| state.errors().get(&field.id).is_some_and(|m| !m.is_empty()))
        {
            self.focus = index;
        }
    }

    fn poll_submission(&mut self) {
        let Some(result) = self.pending.as_ref().and_then(PendingSubmission::poll) else {
            return;
        };
        self.pending = None;
        self.finish_submission(result);
    }

    fn finish_submission(&mut self, result: Result<TransportResponse, TransportError>) {
        match self.form.complete_submit(result) {
            SubmitState::Succeeded => self.status.submitted(),
            _ if self.form.has_errors() => {
                self.status
                    .issues_remaining(self.form.state().error_count());
                self.focus_first_error();
            }
            _ => self.status.submit_failed(),
        }
    }

    fn on_exit(&mut self) {
        let unsent = self.form.state().submit_state() != SubmitState::Succeeded
            && !self.form.state().values().is_empty();
        if self.options.confirm_exit && unsent && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
