//! Client-side models
//!
//! Form values and date helpers. The `Task` entity itself comes from
//! `tasktracker-core`.

pub mod date;
pub mod form;

pub use date::{long_date, today};
pub use form::{TaskFormState, TaskFormValues, TouchedFields};
pub use tasktracker_core::{Priority, Task, TaskStatus};
