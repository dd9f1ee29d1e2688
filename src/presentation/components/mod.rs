mod actions;
mod fields;
mod footer;
mod header;
mod layout;
mod popup;

pub use actions::{FAILURE_BANNER, INVALID_BANNER, SUCCESS_BANNER, render_actions};
pub use fields::render_fields;
pub use footer::render_footer;
pub use header::{header_height, render_header};
pub use popup::render_popup;
