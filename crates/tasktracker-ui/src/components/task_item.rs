//! Task card

use leptos::prelude::*;
use tasktracker_core::{Priority, Task, TaskStatus, format_date};

use crate::models::long_date;

/// CSS class for a priority badge.
#[must_use]
pub const fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge priority-low",
        Priority::Medium => "badge priority-medium",
        Priority::High => "badge priority-high",
    }
}

/// CSS class for a status label.
#[must_use]
pub const fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "task-status status-pending",
        TaskStatus::InProgress => "task-status status-in-progress",
        TaskStatus::Completed => "task-status status-completed",
    }
}

/// Hooks available to anything rendered inside a card.
///
/// Provided as context by [`TaskItem`]; a card-level control reaches it with
/// `use_context::<CardActions>()`.
#[derive(Clone, Copy)]
pub struct CardActions {
    on_update: Callback<()>,
}

impl CardActions {
    #[must_use]
    pub const fn new(on_update: Callback<()>) -> Self {
        Self { on_update }
    }

    /// Tell the owning list a task changed so it re-fetches.
    pub fn task_updated(&self) {
        self.on_update.run(());
    }
}

/// One task in the grid.
///
/// `on_update` asks the owning list to re-fetch after the card changes a task.
#[component]
pub fn TaskItem(task: Task, on_update: Callback<()>) -> impl IntoView {
    provide_context(CardActions::new(on_update));

    let description = (!task.description_text().is_empty())
        .then(|| view! { <p class="task-description">{task.description_text().to_string()}</p> });

    view! {
        <article class="task-card" data-task-id=task.id.to_string()>
            <header class="task-card-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <span class=priority_class(task.priority)>{task.priority.as_str()}</span>
            </header>
            {description}
            <footer class="task-card-footer">
                <span class=status_class(task.status)>{task.status.as_str()}</span>
                <time class="task-due" datetime=format_date(task.due_date)>
                    {long_date(task.due_date)}
                </time>
            </footer>
        </article>
    }
}
