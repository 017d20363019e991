//! Task list: loads tasks, renders them, hosts the creation dialog

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Dialog, TaskForm, TaskItem};
use crate::state::{ListView, TaskListState};

/// Fetch the collection and apply it if this list is still mounted and no
/// newer fetch has started.
fn spawn_fetch(state: RwSignal<TaskListState>, generation: u64, alive: Arc<AtomicBool>) {
    spawn_local(async move {
        let result = api::fetch_tasks().await;
        if !alive.load(Ordering::Acquire) {
            return;
        }

        state.try_update(|s| match result {
            Ok(tasks) => {
                if !s.fetch_succeeded(generation, tasks) {
                    logging::log!("Dropped stale task list (generation {generation})");
                }
            }
            Err(err) => {
                logging::error!("Error fetching tasks: {err}");
                s.fetch_failed(generation, err.to_string());
            }
        });
    });
}

#[component]
pub fn TaskList() -> impl IntoView {
    let state = RwSignal::new(TaskListState::default());

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Release)
    });

    let refresh = {
        let alive = Arc::clone(&alive);
        Callback::new(move |(): ()| {
            if let Some(generation) = state.try_update(TaskListState::begin_fetch) {
                spawn_fetch(state, generation, Arc::clone(&alive));
            }
        })
    };

    let on_created = {
        let alive = Arc::clone(&alive);
        Callback::new(move |(): ()| {
            if let Some(generation) = state.try_update(TaskListState::creation_succeeded) {
                spawn_fetch(state, generation, Arc::clone(&alive));
            }
        })
    };

    let open_dialog = move |_| state.update(TaskListState::open_dialog);
    let close_dialog = Callback::new(move |(): ()| state.update(TaskListState::close_dialog));
    let view_is = move |expected: ListView| state.with(|s| s.view() == expected);

    Effect::new(move |_| refresh.run(()));

    view! {
        <div class="task-list">
            <div class="task-list-header">
                <div>
                    <h2>"Current Focus"</h2>
                    <p class="subtitle">"Manage and track your active objectives"</p>
                </div>
                <button type="button" class="btn-primary" on:click=open_dialog>
                    "Add Task"
                </button>
            </div>

            {move || {
                state
                    .with(|s| s.last_error().is_some())
                    .then(|| {
                        view! {
                            <p class="list-notice" role="status">
                                "Couldn't refresh tasks. Showing the last loaded list."
                            </p>
                        }
                    })
            }}

            <Show when=move || view_is(ListView::Loading)>
                <div class="list-loading" aria-busy="true">
                    <span class="spinner"></span>
                </div>
            </Show>

            <Show when=move || view_is(ListView::Empty)>
                <div class="empty-state">
                    <h3>"No tasks yet"</h3>
                    <p>"Add your first objective to begin tracking your progress."</p>
                    <button type="button" class="btn-outline" on:click=open_dialog>
                        "Create your first task"
                    </button>
                </div>
            </Show>

            <Show when=move || view_is(ListView::Grid)>
                <div class="task-grid">
                    <For
                        each=move || state.with(|s| s.tasks().to_vec())
                        key=|task| task.id
                        let:task
                    >
                        <TaskItem task=task on_update=refresh />
                    </For>
                </div>
            </Show>

            <Dialog
                open=Signal::derive(move || state.with(TaskListState::dialog_open))
                title="New Objective"
                on_close=close_dialog
            >
                <TaskForm on_success=on_created />
            </Dialog>
        </div>
    }
}
