mod document;
mod format;

pub use document::{FormDocument, parse_form_document};
pub use format::{DocumentFormat, parse_document_str};
