#![deny(rust_2018_idioms)]

mod app;
pub mod contact;
mod domain;
mod form;
mod io;
mod presentation;
mod submit;
mod validation;

pub use app::{FormUI, UiOptions};
pub use domain::{
    DescriptorError, EditorKind, FieldDescriptor, FieldErrors, FieldValues, first_error,
    has_errors,
};
pub use form::{
    Field, FieldView, Form, FormContext, FormPhase, FormReport, FormState, SubmitRequest,
    SubmitStart, SubmitState,
};
pub use io::{DocumentFormat, FormDocument, parse_document_str, parse_form_document};
pub use presentation::{FAILURE_BANNER, INVALID_BANNER, SUCCESS_BANNER};
pub use submit::{
    FIELD_REJECTION_STATUS, HttpTransport, Transport, TransportError, TransportResponse,
    map_server_errors,
};
pub use validation::{Rule, RuleFn, ValidationBinding, is_email, max_length, required};

pub mod prelude {
    pub use super::{
        EditorKind, FieldDescriptor, Form, FormContext, FormReport, FormUI, Transport,
        TransportResponse, UiOptions,
    };
}
