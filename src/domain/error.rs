use thiserror::Error;

/// Problems found while building field descriptors from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("field id must not be empty")]
    EmptyId,
    #[error("field `{0}` is declared more than once")]
    DuplicateId(String),
    #[error("unknown editor `{0}` (expected textbox, multilinetextbox or dropdown)")]
    UnknownEditor(String),
    #[error("unknown validation rule `{0}`")]
    UnknownRule(String),
}
