//! Application state containers
//!
//! Plain structs holding UI state, wrapped in signals by the components that
//! own them. Keeping the transitions here lets them be tested without a DOM.

pub mod list;
pub mod toast;

pub use list::{ListView, TaskListState};
pub use toast::{Toast, ToastKind, Toasts};
