mod components;
mod view;

pub use components::{FAILURE_BANNER, INVALID_BANNER, SUCCESS_BANNER};
pub use view::{Focus, PopupRender, UiContext, draw};
