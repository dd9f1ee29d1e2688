pub(crate) mod input;
mod options;
mod popup;
mod runtime;
mod form_ui;
mod status;
mod terminal;

pub use form_ui::FormUI;
pub use options::UiOptions;
