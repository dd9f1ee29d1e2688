mod descriptor;
mod error;
mod values;

pub(crate) use descriptor::check_descriptors;
pub use descriptor::{EditorKind, FieldDescriptor};
pub use error::DescriptorError;
pub use values::{FieldErrors, FieldValues, first_error, has_errors};
