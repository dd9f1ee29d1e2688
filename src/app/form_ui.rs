use std::sync::Arc;

use anyhow::{Context, Result};

use crate::{
    form::{Form, FormReport},
    submit::{HttpTransport, Transport},
};

use super::{options::UiOptions, runtime::App};

/// Runs a [`Form`] as an interactive terminal UI.
pub struct FormUI {
    form: Form,
    title: Option<String>,
    intro: Option<String>,
    options: UiOptions,
    transport: Option<Arc<dyn Transport>>,
}

impl FormUI {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            title: None,
            intro: None,
            options: UiOptions::default(),
            transport: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Text shown above the fields.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the default HTTP client.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Blocks until the user quits and returns the final state of the form.
    pub fn run(self) -> Result<FormReport> {
        let FormUI {
            form,
            title,
            intro,
            options,
            transport,
        } = self;

        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new().context("failed to prepare HTTP client")?),
        };
        let title = title.unwrap_or_else(|| "Form".to_string());
        tracing::info!(action = form.action(), fields = form.fields().len(), "starting form UI");

        let mut app = App::new(form, transport, options)
            .with_title(title)
            .with_intro(intro);
        app.run()
    }
}

impl std::fmt::Debug for FormUI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormUI")
            .field("form", &self.form)
            .field("title", &self.title)
            .field("intro", &self.intro)
            .field("options", &self.options)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}
