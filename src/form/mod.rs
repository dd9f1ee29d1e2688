mod container;
mod context;
pub mod field;
mod state;

pub use container::{Form, SubmitRequest, SubmitStart};
pub use context::FormContext;
pub use field::{Field, FieldView};
pub use state::{FormPhase, FormReport, FormState, SubmitState};
