use serde_json::Value;

use crate::{
    domain::{DescriptorError, FieldDescriptor, FieldErrors, FieldValues, check_descriptors},
    submit::{Transport, TransportError, TransportResponse, map_server_errors},
};

use super::{
    context::FormContext,
    state::{FormState, SubmitState},
};

/// What the pipeline needs to send once the form validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub url: String,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    Ready(SubmitRequest),
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// An earlier submission has not finished yet.
    InFlight,
}

/// Owner of the form state and the submission pipeline.
#[derive(Debug, Clone)]
pub struct Form {
    action: String,
    fields: Vec<FieldDescriptor>,
    state: FormState,
}

impl Form {
    pub fn new(
        action: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, DescriptorError> {
        check_descriptors(&fields)?;
        Ok(Self {
            action: action.into(),
            fields,
            state: FormState::new(),
        })
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// True when a declared field carries a non-empty message. Server errors for
    /// fields the form does not declare are kept in the state but never block.
    pub fn has_errors(&self) -> bool {
        self.fields
            .iter()
            .any(|field| self.error(&field.id).is_some())
    }

    /// Whether the submit trigger should be enabled right now.
    pub fn can_submit(&self) -> bool {
        !self.has_errors() && self.state.submit != SubmitState::Submitting
    }

    /// Validates every configured field, touched or not. True when none has an error.
    pub fn validate_form(&mut self) -> bool {
        let fields = &self.fields;
        self.state.errors.retain(|id, _| {
            let declared = fields.iter().any(|field| &field.id == id);
            if !declared {
                tracing::debug!(field = %id, "dropping error for undeclared field");
            }
            declared
        });
        for index in 0..self.fields.len() {
            self.validate_at(index);
        }
        !self.has_errors()
    }

    /// Validates the whole form and, when it passes, moves into `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state.submit == SubmitState::Submitting {
            tracing::debug!(action = %self.action, "submission already in flight");
            return SubmitStart::InFlight;
        }
        if !self.validate_form() {
            tracing::info!(
                errors = self.state.error_count(),
                "form is invalid; not submitting"
            );
            return SubmitStart::Invalid;
        }
        self.state.submit = SubmitState::Submitting;
        let body = Value::Object(
            self.state
                .values
                .iter()
                .map(|(id, value)| (id.clone(), value.clone()))
                .collect(),
        );
        tracing::debug!(values = %body, "submitting form values");
        tracing::info!(action = %self.action, "submitting form");
        SubmitStart::Ready(SubmitRequest {
            url: self.action.clone(),
            body,
        })
    }

    /// Applies the transport outcome of a submission started with [`Form::begin_submit`].
    pub fn complete_submit(
        &mut self,
        result: Result<TransportResponse, TransportError>,
    ) -> SubmitState {
        if self.state.submit != SubmitState::Submitting {
            tracing::warn!(state = ?self.state.submit, "completing a submission that was not started");
        }
        let succeeded = match result {
            Ok(response) => {
                if response.is_field_rejection() {
                    match map_server_errors(&response.body) {
                        Ok(server_errors) => self.merge_errors(server_errors),
                        Err(err) => {
                            tracing::warn!(error = %err, "unreadable field rejection body");
                        }
                    }
                }
                response.is_ok()
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                false
            }
        };
        self.state.submit = if succeeded {
            SubmitState::Succeeded
        } else {
            SubmitState::Failed
        };
        tracing::info!(succeeded, "submission finished");
        self.state.submit
    }

    /// Runs the full pipeline on the calling thread.
    pub fn submit(&mut self, transport: &dyn Transport) -> SubmitStart {
        let start = self.begin_submit();
        if let SubmitStart::Ready(request) = &start {
            let result = transport.post_json(&request.url, &request.body);
            self.complete_submit(result);
        }
        start
    }

    fn merge_errors(&mut self, errors: FieldErrors) {
        for (id, message) in errors {
            if self.field(&id).is_none() {
                tracing::debug!(field = %id, "server rejected a field this form does not declare");
            }
            self.state.errors.insert(id, message);
        }
    }

    fn validate_at(&mut self, index: usize) {
        let field = &self.fields[index];
        match &field.validation {
            Some(binding) => {
                let message = binding.evaluate(&self.state.values, &field.id);
                self.state.errors.insert(field.id.clone(), message);
            }
            None => {
                self.state.errors.shift_remove(&field.id);
            }
        }
    }
}

impl FormContext for Form {
    fn values(&self) -> &FieldValues {
        &self.state.values
    }

    fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    fn set_values(&mut self, values: FieldValues) {
        tracing::trace!(fields = values.len(), "merging field values");
        self.state.values.extend(values);
    }

    fn validate(&mut self, field_id: &str) {
        match self.fields.iter().position(|field| field.id == field_id) {
            Some(index) => self.validate_at(index),
            None => tracing::debug!(field = field_id, "validate called for unknown field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use serde_json::json;

    use super::*;
    use crate::{
        domain::EditorKind,
        form::state::FormPhase,
        validation::Rule,
    };

    fn values(pairs: &[(&str, Value)]) -> FieldValues {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn contact_form() -> Form {
        Form::new(
            "http://localhost:3000/api/contactus",
            vec![
                FieldDescriptor::new("name").with_rule(Rule::REQUIRED),
                FieldDescriptor::new("email").with_rule(Rule::IS_EMAIL),
                FieldDescriptor::new("reason")
                    .with_editor(EditorKind::Dropdown)
                    .with_options(["", "Support"]),
                FieldDescriptor::new("notes")
                    .with_editor(EditorKind::MultilineTextBox)
                    .with_rule_args(Rule::MAX_LENGTH, 1000),
            ],
        )
        .expect("valid descriptors")
    }

    fn filled_form() -> Form {
        let mut form = contact_form();
        form.set_values(values(&[
            ("name", json!("Ada")),
            ("email", json!("ada@example.com")),
            ("notes", json!("hello")),
        ]));
        form
    }

    struct RecordingTransport {
        calls: AtomicUsize,
        bodies: Mutex<Vec<Value>>,
        reply: fn() -> Result<TransportResponse, TransportError>,
    }

    impl RecordingTransport {
        fn new(reply: fn() -> Result<TransportResponse, TransportError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                bodies: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    impl Transport for RecordingTransport {
        fn post_json(
            &self,
            _url: &str,
            body: &Value,
        ) -> Result<TransportResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies.lock().unwrap().push(body.clone());
            (self.reply)()
        }
    }

    #[test]
    fn set_values_merges_without_losing_keys() {
        let mut form = contact_form();
        form.set_values(values(&[("a", json!(1))]));
        form.set_values(values(&[("b", json!(2))]));
        assert_eq!(form.values(), &values(&[("a", json!(1)), ("b", json!(2))]));
        form.set_values(values(&[("a", json!(3))]));
        assert_eq!(form.values().get("a"), Some(&json!(3)));
        assert_eq!(form.values().get("b"), Some(&json!(2)));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut form = contact_form();
        form.set_values(values(&[("email", json!("nope"))]));
        form.validate("email");
        let first = form.errors().get("email").cloned();
        form.validate("email");
        assert_eq!(form.errors().get("email").cloned(), first);
        assert_eq!(first.as_deref(), Some("This must be in a valid email format"));
    }

    #[test]
    fn validate_replaces_previous_message() {
        let mut form = contact_form();
        form.validate("name");
        assert_eq!(form.error("name"), Some("This must be populated"));
        form.set_values(values(&[("name", json!("Ada"))]));
        form.validate("name");
        assert_eq!(form.errors().get("name").map(String::as_str), Some(""));
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn fields_without_rules_never_get_errors() {
        let mut form = contact_form();
        form.validate("reason");
        assert!(!form.errors().contains_key("reason"));
        form.validate("missing");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn validate_form_checks_untouched_fields() {
        let mut form = contact_form();
        assert!(!form.validate_form());
        assert_eq!(form.error("name"), Some("This must be populated"));
        assert_eq!(form.error("email"), None);

        form.set_values(values(&[("name", json!("Ada"))]));
        assert!(form.validate_form());
        assert!(!form.has_errors());
    }

    #[test]
    fn validate_form_fails_iff_some_rule_fails() {
        let mut form = filled_form();
        assert!(form.validate_form());
        form.set_values(values(&[("notes", json!("a".repeat(1001)))]));
        assert!(!form.validate_form());
        assert!(form.error("notes").is_some_and(|m| m.contains("1000")));
    }

    #[test]
    fn empty_required_field_blocks_the_request() {
        let mut form = Form::new(
            "http://localhost/api",
            vec![FieldDescriptor::new("name").with_rule(Rule::REQUIRED)],
        )
        .unwrap();
        let transport = RecordingTransport::new(|| Ok(TransportResponse::new(200, "")));
        assert_eq!(form.submit(&transport), SubmitStart::Invalid);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(form.error("name").is_some());
        assert_eq!(form.state().submit_success(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn ok_response_marks_success() {
        let mut form = filled_form();
        let transport = RecordingTransport::new(|| Ok(TransportResponse::new(200, "{}")));
        assert!(matches!(form.submit(&transport), SubmitStart::Ready(_)));
        assert_eq!(form.state().submit_success(), Some(true));
        assert!(!form.has_errors());
        assert_eq!(form.state().phase(), FormPhase::Succeeded);
        let bodies = transport.bodies.lock().unwrap();
        assert_eq!(
            bodies[0],
            json!({"name": "Ada", "email": "ada@example.com", "notes": "hello"})
        );
    }

    #[test]
    fn field_rejection_maps_server_errors() {
        let mut form = filled_form();
        let transport = RecordingTransport::new(|| {
            Ok(TransportResponse::new(400, r#"{"Email":"Must be unique"}"#))
        });
        form.submit(&transport);
        assert_eq!(form.error("email"), Some("Must be unique"));
        assert_eq!(form.state().submit_success(), Some(false));
        assert_eq!(form.state().phase(), FormPhase::Invalid);
        assert!(!form.can_submit());
    }

    #[test]
    fn undeclared_server_errors_do_not_lock_the_form() {
        let mut form = Form::new(
            "http://localhost/api",
            vec![FieldDescriptor::new("name").with_rule(Rule::REQUIRED)],
        )
        .unwrap();
        form.set_values(values(&[("name", json!("Ada"))]));
        let rejecting = RecordingTransport::new(|| {
            Ok(TransportResponse::new(400, r#"{"Phone":"Bad phone"}"#))
        });
        form.submit(&rejecting);
        assert_eq!(form.errors().get("phone").map(String::as_str), Some("Bad phone"));
        assert_eq!(form.state().phase(), FormPhase::Invalid);
        assert!(form.can_submit());

        assert!(form.validate_form());
        assert!(!form.errors().contains_key("phone"));

        let accepting = RecordingTransport::new(|| Ok(TransportResponse::new(200, "")));
        assert!(matches!(form.submit(&accepting), SubmitStart::Ready(_)));
        assert_eq!(accepting.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.state().submit_success(), Some(true));
    }

    #[test]
    fn transport_failure_leaves_errors_alone() {
        let mut form = filled_form();
        form.validate_form();
        let before = form.errors().clone();
        let transport = RecordingTransport::new(|| {
            Err(TransportError::Unavailable("connection refused".into()))
        });
        form.submit(&transport);
        assert_eq!(form.state().submit_success(), Some(false));
        assert_eq!(form.errors(), &before);
        assert_eq!(form.state().phase(), FormPhase::Failed);
    }

    #[test]
    fn unreadable_rejection_body_is_a_plain_failure() {
        let mut form = filled_form();
        let transport = RecordingTransport::new(|| Ok(TransportResponse::new(400, "<html>")));
        form.submit(&transport);
        assert_eq!(form.state().submit_success(), Some(false));
        assert!(!form.has_errors());
    }

    #[test]
    fn server_error_status_is_a_failure() {
        let mut form = filled_form();
        let transport = RecordingTransport::new(|| Ok(TransportResponse::new(500, "oops")));
        form.submit(&transport);
        assert_eq!(form.state().phase(), FormPhase::Failed);
    }

    #[test]
    fn second_submission_is_refused_while_in_flight() {
        let mut form = filled_form();
        let SubmitStart::Ready(request) = form.begin_submit() else {
            panic!("form should be ready");
        };
        assert_eq!(request.url, "http://localhost:3000/api/contactus");
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), SubmitStart::InFlight);
        form.complete_submit(Ok(TransportResponse::new(201, "")));
        assert_eq!(form.state().submit_state(), SubmitState::Succeeded);
        assert!(form.can_submit());
    }

    #[test]
    fn closures_act_as_transports() {
        let mut form = filled_form();
        let transport = |url: &str, _: &Value| -> Result<TransportResponse, TransportError> {
            assert!(url.ends_with("/contactus"));
            Ok(TransportResponse::new(204, ""))
        };
        form.submit(&transport);
        assert_eq!(form.state().submit_success(), Some(true));
    }

    #[test]
    fn duplicate_descriptors_are_rejected() {
        let result = Form::new(
            "http://localhost",
            vec![FieldDescriptor::new("a"), FieldDescriptor::new("a")],
        );
        assert_eq!(
            result.err(),
            Some(DescriptorError::DuplicateId("a".into()))
        );
    }
}
