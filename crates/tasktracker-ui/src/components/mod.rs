//! Leptos UI components

pub mod dialog;
pub mod task_form;
pub mod task_item;
pub mod task_list;
pub mod toast;

pub use dialog::Dialog;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use toast::{Toaster, provide_toasts, show_toast, use_toasts};
