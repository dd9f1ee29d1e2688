use serde::Serialize;

use crate::domain::{FieldErrors, FieldValues, has_errors};

/// Progress of the submission pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Unsubmitted,
    /// A request is in flight; further submissions are refused.
    Submitting,
    Succeeded,
    Failed,
}

/// What the user is told about the form as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Unsubmitted,
    Submitting,
    Succeeded,
    /// The request failed and no field carries an error.
    Failed,
    /// The request failed and at least one field carries an error.
    Invalid,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub(crate) values: FieldValues,
    pub(crate) errors: FieldErrors,
    pub(crate) submit: SubmitState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// `None` until a submission has finished, then whether it succeeded.
    pub fn submit_success(&self) -> Option<bool> {
        match self.submit {
            SubmitState::Unsubmitted | SubmitState::Submitting => None,
            SubmitState::Succeeded => Some(true),
            SubmitState::Failed => Some(false),
        }
    }

    pub fn has_errors(&self) -> bool {
        has_errors(&self.errors)
    }

    pub fn error_count(&self) -> usize {
        self.errors
            .values()
            .filter(|message| !message.is_empty())
            .count()
    }

    pub fn phase(&self) -> FormPhase {
        match self.submit {
            SubmitState::Unsubmitted => FormPhase::Unsubmitted,
            SubmitState::Submitting => FormPhase::Submitting,
            SubmitState::Succeeded => FormPhase::Succeeded,
            SubmitState::Failed if self.has_errors() => FormPhase::Invalid,
            SubmitState::Failed => FormPhase::Failed,
        }
    }

    pub fn report(&self) -> FormReport {
        FormReport {
            values: self.values.clone(),
            errors: self
                .errors
                .iter()
                .filter(|(_, message)| !message.is_empty())
                .map(|(id, message)| (id.clone(), message.clone()))
                .collect(),
            submit_success: self.submit_success(),
        }
    }
}

/// Snapshot of a form after the UI closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub submit_success: Option<bool>,
}
