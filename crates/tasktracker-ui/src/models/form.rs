//! Task form state
//!
//! The form keeps raw, editable values. Validity is always derived by
//! building the wire payload and running the shared schema over it, plus the
//! form-only "not in the past" rule.

use chrono::NaiveDate;
use tasktracker_core::{
    CreateTaskRequest, Field, Priority, TaskStatus, ValidationErrors, ensure_not_past, format_date,
    parse_date,
};

/// Editable values behind the create form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFormValues {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskFormValues {
    /// Set the due date from a date input's value (`""` clears it).
    pub fn set_due_date_input(&mut self, value: &str) {
        self.due_date = parse_date(value).ok();
    }

    /// Due date rendered for a date input's `value`.
    #[must_use]
    pub fn due_date_input(&self) -> String {
        self.due_date.map(format_date).unwrap_or_default()
    }

    /// Wire payload for `POST /api/tasks`.
    ///
    /// Description is always sent, as `""` when left empty. Status is always
    /// `Pending`.
    #[must_use]
    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            priority: Some(self.priority.to_string()),
            due_date: self.due_date.map(format_date),
            status: Some(TaskStatus::Pending.to_string()),
        }
    }

    /// Every violation, given the current local date.
    #[must_use]
    pub fn errors(&self, today: NaiveDate) -> ValidationErrors {
        let mut errors = self.to_request().field_errors();
        if let Some(Err(err)) = self.due_date.map(|due| ensure_not_past(due, today)) {
            errors.push(err);
        }
        errors
    }

    #[must_use]
    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.errors(today).is_empty()
    }

    /// Submit is enabled only for a valid form with no request in flight.
    #[must_use]
    pub fn can_submit(&self, submitting: bool, today: NaiveDate) -> bool {
        !submitting && self.is_valid(today)
    }
}

/// Which fields the user has interacted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchedFields {
    title: bool,
    description: bool,
    priority: bool,
    due_date: bool,
}

impl TouchedFields {
    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Title => self.title = true,
            Field::Description => self.description = true,
            Field::Priority => self.priority = true,
            Field::DueDate => self.due_date = true,
            Field::Status => {}
        }
    }

    #[must_use]
    pub const fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Priority => self.priority,
            Field::DueDate => self.due_date,
            Field::Status => false,
        }
    }

    /// The message to show under `field`, if it has been touched and is invalid.
    #[must_use]
    pub fn visible_error(&self, errors: &ValidationErrors, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        errors.message_for(field).map(ToString::to_string)
    }
}

/// Everything the create form tracks between renders
///
/// Submission runs `begin_submit` → request → `submission_succeeded` or
/// `submission_failed`. Submit stays disabled from `begin_submit` until one
/// of the two outcomes is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFormState {
    pub values: TaskFormValues,
    pub touched: TouchedFields,
    submitting: bool,
}

impl TaskFormState {
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.values.can_submit(self.submitting, today)
    }

    /// Mark every editable field as touched so all messages show.
    pub fn touch_all(&mut self) {
        for field in [Field::Title, Field::Description, Field::Priority, Field::DueDate] {
            self.touched.touch(field);
        }
    }

    /// Start a submission and return the payload to send.
    ///
    /// An invalid form, or one already submitting, yields `None` and reveals
    /// every field's message instead.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Option<CreateTaskRequest> {
        if !self.can_submit(today) {
            self.touch_all();
            return None;
        }
        self.submitting = true;
        Some(self.values.to_request())
    }

    /// The task was created: back to a blank form.
    pub fn submission_succeeded(&mut self) {
        *self = Self::default();
    }

    /// The request failed: keep what was entered and allow a retry.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }
}
