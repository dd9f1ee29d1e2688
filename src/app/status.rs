#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to submit.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn value_updated(&mut self) {
        self.message = "Value updated".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} field(s) need attention");
    }

    pub fn submit_blocked(&mut self) {
        self.message = "Fix the highlighted fields before submitting".to_string();
    }

    pub fn submitting(&mut self, url: &str) {
        self.message = format!("Submitting to {url}…");
    }

    pub fn still_submitting(&mut self) {
        self.message = "A submission is already in progress".to_string();
    }

    pub fn submitted(&mut self) {
        self.message = "Submitted. Press Ctrl+Q to exit.".to_string();
    }

    pub fn submit_failed(&mut self) {
        self.message = "Submission failed".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Form not submitted. Press Ctrl+Q again to quit anyway.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
