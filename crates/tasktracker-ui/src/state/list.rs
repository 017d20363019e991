//! Task list state
//!
//! Fetches are tagged with a generation number. Only the result of the most
//! recently started fetch is applied; anything older is dropped.

use tasktracker_core::Task;

/// What the list area should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// A fetch is outstanding; the grid is hidden
    Loading,
    /// No tasks; show the call-to-action
    Empty,
    /// Render one card per task
    Grid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListState {
    tasks: Vec<Task>,
    loading: bool,
    generation: u64,
    dialog_open: bool,
    last_error: Option<String>,
}

/// A fresh list is loading: the mount fetch is about to start.
impl Default for TaskListState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            generation: 0,
            dialog_open: false,
            last_error: None,
        }
    }
}

impl TaskListState {
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Message from the last failed fetch, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.tasks.is_empty() {
            ListView::Empty
        } else {
            ListView::Grid
        }
    }

    /// Mark a fetch as started and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetched collection. Returns `false` if the result was stale.
    pub fn fetch_succeeded(&mut self, generation: u64, tasks: Vec<Task>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.tasks = tasks;
        self.loading = false;
        self.last_error = None;
        true
    }

    /// Record a failed fetch, keeping the previous collection on screen.
    /// Returns `false` if the result was stale.
    pub fn fetch_failed(&mut self, generation: u64, error: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.last_error = Some(error.into());
        true
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// A task was created: close the dialog and start a re-fetch.
    pub fn creation_succeeded(&mut self) -> u64 {
        self.close_dialog();
        self.begin_fetch()
    }
}
