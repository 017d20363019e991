//! The task entity as stored in the `tasks` table.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Field, ValidationError};

/// Task priority enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(Field::Priority, "Priority must be one of Low, Medium, High")
            })
    }
}

/// Task status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    Field::Status,
                    "Status must be one of Pending, In Progress, Completed",
                )
            })
    }
}

/// A persisted task row.
///
/// Field order follows the column order of the `tasks` table so serialized
/// rows match what the store returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: NaiveDate,
    /// The column is nullable; a null status reads as `Pending`.
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<TaskStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Task {
    /// Description text, empty when the column is null.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// A validated task ready to be inserted.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl NewTask {
    /// Creates a new pending task with the required fields.
    pub fn new(title: impl Into<String>, priority: Priority, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority,
            due_date,
            status: TaskStatus::default(),
        }
    }

    /// Builder pattern: set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder pattern: set status
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach store-assigned identity, producing the persisted row.
    #[must_use]
    pub fn into_task(self, id: Uuid, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            status: self.status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("high".parse::<Priority>().is_err());
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            "In Progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_unknown_status_reports_status_field() {
        let err = "Archived".parse::<TaskStatus>().unwrap_err();
        assert_eq!(err.field, Field::Status);
    }

    #[test]
    fn test_new_task_defaults_to_pending() {
        let task = NewTask::new("Buy milk", Priority::Low, due());
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_new_task_skips_absent_description() {
        let json = serde_json::to_value(NewTask::new("Buy milk", Priority::Low, due())).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["due_date"], "2025-03-12");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_task_deserializes_store_row() {
        let json = r#"{
            "id": "5f0c6f0e-8a2b-4c1d-9e3f-0a1b2c3d4e5f",
            "title": "Write report",
            "description": null,
            "priority": "High",
            "due_date": "2025-03-12",
            "status": "In Progress",
            "created_at": "2025-03-01T09:30:00.123456+00:00"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description_text(), "");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, due());
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_null_or_missing_status_reads_as_pending() {
        let with_null = r#"{
            "id": "5f0c6f0e-8a2b-4c1d-9e3f-0a1b2c3d4e5f",
            "title": "Write report",
            "priority": "High",
            "due_date": "2025-03-12",
            "status": null,
            "created_at": "2025-03-01T09:30:00Z"
        }"#;
        let without = r#"{
            "id": "5f0c6f0e-8a2b-4c1d-9e3f-0a1b2c3d4e5f",
            "title": "Write report",
            "priority": "High",
            "due_date": "2025-03-12",
            "created_at": "2025-03-01T09:30:00Z"
        }"#;

        let task: Task = serde_json::from_str(with_null).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        let task: Task = serde_json::from_str(without).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_unknown_stored_status_still_rejected() {
        let json = r#"{
            "id": "5f0c6f0e-8a2b-4c1d-9e3f-0a1b2c3d4e5f",
            "title": "Write report",
            "priority": "High",
            "due_date": "2025-03-12",
            "status": "Archived",
            "created_at": "2025-03-01T09:30:00Z"
        }"#;

        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_into_task_keeps_fields() {
        let id = Uuid::nil();
        let now = Utc::now();
        let task = NewTask::new("Plan sprint", Priority::Medium, due())
            .with_description("Backlog grooming")
            .with_status(TaskStatus::Completed)
            .into_task(id, now);

        assert_eq!(task.id, id);
        assert_eq!(task.created_at, now);
        assert_eq!(task.description_text(), "Backlog grooming");
        assert_eq!(task.status, TaskStatus::Completed);
    }
}
