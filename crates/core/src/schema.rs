//! The create-task schema.
//!
//! `CreateTaskRequest` is the wire payload accepted by `POST /api/tasks` and
//! produced by the entry form. Both sides run the checks in this module, so
//! the limits live in exactly one place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Field, SchemaError, ValidationError, ValidationErrors};
use crate::task::{NewTask, Priority, TaskStatus};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Calendar-date format used on the wire (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw create payload. Every field is optional so presence can be checked
/// explicitly instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateTaskRequest {
    /// `true` when title, priority and due date are all present and non-empty.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.priority, &self.due_date]
            .into_iter()
            .all(|field| present(field.as_deref()).is_some())
    }

    /// Validate into a typed [`NewTask`].
    ///
    /// Status defaults to `Pending` when omitted.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingRequiredFields`] before any other check
    /// when a required field is absent, otherwise [`SchemaError::Invalid`]
    /// with every violation found.
    pub fn validate(&self) -> Result<NewTask, SchemaError> {
        if !self.has_required_fields() {
            return Err(SchemaError::MissingRequiredFields);
        }

        let checked = self.check();
        match checked {
            Checked {
                title: Some(title),
                priority: Some(priority),
                due_date: Some(due_date),
                status: Some(status),
                errors,
            } if errors.is_empty() => Ok(NewTask {
                title,
                description: self.description.clone(),
                priority,
                due_date,
                status,
            }),
            Checked { errors, .. } => Err(SchemaError::Invalid(errors)),
        }
    }

    /// Field-level violations, including missing required fields.
    ///
    /// Used by the entry form to render a message next to each field.
    #[must_use]
    pub fn field_errors(&self) -> ValidationErrors {
        self.check().errors
    }

    fn check(&self) -> Checked {
        let mut errors = ValidationErrors::new();

        let title = collect(&mut errors, check_title(self.title.as_deref()));
        if let Err(err) = check_description(self.description.as_deref()) {
            errors.push(err);
        }
        let priority = collect(&mut errors, check_priority(self.priority.as_deref()));
        let due_date = collect(&mut errors, check_due_date(self.due_date.as_deref()));
        let status = collect(&mut errors, check_status(self.status.as_deref()));

        Checked {
            title,
            priority,
            due_date,
            status,
            errors,
        }
    }
}

/// Outcome of one pass over a request.
struct Checked {
    title: Option<String>,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
    status: Option<TaskStatus>,
    errors: ValidationErrors,
}

impl From<&NewTask> for CreateTaskRequest {
    fn from(task: &NewTask) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: task.description.clone(),
            priority: Some(task.priority.to_string()),
            due_date: Some(format_date(task.due_date)),
            status: Some(task.status.to_string()),
        }
    }
}

/// Render a date in the wire format.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a wire-format date.
///
/// # Errors
///
/// Returns a `due_date` validation error when `value` is not `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ValidationError::new(Field::DueDate, "Due date must be a valid date (YYYY-MM-DD)")
    })
}

/// Reject due dates before `today`. Applied by the entry form only.
///
/// # Errors
///
/// Returns a `due_date` validation error when `due_date < today`.
pub fn ensure_not_past(due_date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if due_date < today {
        return Err(ValidationError::new(
            Field::DueDate,
            "Due date cannot be in the past",
        ));
    }
    Ok(())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn collect<T>(errors: &mut ValidationErrors, result: Result<T, ValidationError>) -> Option<T> {
    result.map_err(|err| errors.push(err)).ok()
}

fn check_title(title: Option<&str>) -> Result<String, ValidationError> {
    let title =
        present(title).ok_or_else(|| ValidationError::new(Field::Title, "Title is required"))?;
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::new(
            Field::Title,
            format!("Title must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }
    Ok(title.to_string())
}

fn check_description(description: Option<&str>) -> Result<(), ValidationError> {
    match description {
        Some(text) if text.chars().count() > DESCRIPTION_MAX_CHARS => Err(ValidationError::new(
            Field::Description,
            format!("Description must be at most {DESCRIPTION_MAX_CHARS} characters"),
        )),
        _ => Ok(()),
    }
}

fn check_priority(priority: Option<&str>) -> Result<Priority, ValidationError> {
    present(priority)
        .ok_or_else(|| ValidationError::new(Field::Priority, "Priority is required"))?
        .parse()
}

fn check_due_date(due_date: Option<&str>) -> Result<NaiveDate, ValidationError> {
    present(due_date)
        .ok_or_else(|| ValidationError::new(Field::DueDate, "Due date is required"))
        .and_then(parse_date)
}

fn check_status(status: Option<&str>) -> Result<TaskStatus, ValidationError> {
    present(status).map_or(Ok(TaskStatus::default()), str::parse)
}
