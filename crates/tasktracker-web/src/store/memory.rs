//! In-memory implementation of the task store.
//!
//! Rows live in a `Vec` protected by a `RwLock`. Suitable for development and
//! testing; nothing survives a restart.

use std::sync::Arc;

use chrono::Utc;
use tasktracker_core::{NewTask, Task};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TaskStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    /// Rows in insertion order.
    rows: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `tasks`, treated as inserted in order.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let rows = self.rows.read().await;

        // Reverse first so rows sharing a timestamp come back newest-inserted first.
        let mut tasks = rows.iter().rev().cloned().collect::<Vec<_>>();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = tasks.len(), "Listed tasks from memory");
        Ok(tasks)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task, StoreError> {
        let mut rows = self.rows.write().await;

        let task = task.into_task(Uuid::new_v4(), Utc::now());
        rows.push(task.clone());

        tracing::debug!(id = %task.id, "Inserted task into memory");
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use chrono::{Duration, NaiveDate};
    use tasktracker_core::{Priority, TaskStatus};

    fn new_task(title: &str) -> NewTask {
        NewTask::new(
            title,
            Priority::Medium,
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_identity() {
        let store = InMemoryTaskStore::new();
        let before = Utc::now();

        let task = store.insert_task(new_task("Buy milk")).await.unwrap();

        assert!(!task.id.is_nil());
        assert!(task.created_at >= before);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = InMemoryTaskStore::new();
        for title in ["first", "second", "third"] {
            store.insert_task(new_task(title)).await.unwrap();
        }

        let titles = store
            .list_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect::<Vec<_>>();

        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_orders_seeded_rows_by_created_at() {
        let now = Utc::now();
        let older = new_task("older").into_task(Uuid::new_v4(), now - Duration::hours(1));
        let newer = new_task("newer").into_task(Uuid::new_v4(), now);

        // Seeded out of order on purpose.
        let store = InMemoryTaskStore::with_tasks(vec![newer, older]);
        let tasks = store.list_tasks().await.unwrap();

        assert_eq!(tasks.first().map(|t| t.title.as_str()), Some("newer"));
        assert_eq!(tasks.last().map(|t| t.title.as_str()), Some("older"));
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = InMemoryTaskStore::new();
        assert!(store.is_empty().await);
        assert!(store.list_tasks().await.unwrap().is_empty());
    }
}
