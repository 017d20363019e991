//! Create-task form
//!
//! Validates with the shared schema on every edit. Submit stays disabled
//! until the form is valid and no request is in flight.

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tasktracker_core::{Field, Priority, format_date};

use crate::api;
use crate::components::toast::{show_toast, use_toasts};
use crate::models::{TaskFormState, today};
use crate::state::ToastKind;

pub const SUCCESS_MESSAGE: &str = "Task created successfully";

#[component]
pub fn TaskForm(on_success: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(TaskFormState::default());
    let toasts = use_toasts();

    let today = today();
    let errors = Memo::new(move |_| form.with(|state| state.values.errors(today)));
    let can_submit = move || form.with(|state| state.can_submit(today));
    let submitting = move || form.with(TaskFormState::is_submitting);
    let error_for = move |field: Field| {
        form.with(|state| errors.with(|e| state.touched.visible_error(e, field)))
    };
    let touch = move |field: Field| form.update(|state| state.touched.touch(field));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|state| state.begin_submit(today)).flatten() else {
            return;
        };

        spawn_local(async move {
            match api::create_task(&request).await {
                Ok(task) => {
                    logging::log!("Created task {}", task.id);
                    form.try_update(TaskFormState::submission_succeeded);
                    show_toast(toasts, ToastKind::Success, SUCCESS_MESSAGE);
                    on_success.run(());
                }
                Err(err) => {
                    logging::error!("Failed to create task: {err}");
                    form.try_update(TaskFormState::submission_failed);
                    show_toast(toasts, ToastKind::Error, err.user_message());
                }
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit novalidate=true>
            <div class="form-group">
                <label for="task-title">"Title"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || form.with(|state| state.values.title.clone())
                    on:input=move |ev| {
                        form.update(|state| {
                            state.values.title = event_target_value(&ev);
                            state.touched.touch(Field::Title);
                        });
                    }
                    on:blur=move |_| touch(Field::Title)
                />
                <FieldError message=Signal::derive(move || error_for(Field::Title)) />
            </div>

            <div class="form-group">
                <label for="task-description">
                    "Description " <span class="optional">"(Optional)"</span>
                </label>
                <textarea
                    id="task-description"
                    placeholder="Add some context or details..."
                    rows="4"
                    prop:value=move || form.with(|state| state.values.description.clone())
                    on:input=move |ev| {
                        form.update(|state| {
                            state.values.description = event_target_value(&ev);
                            state.touched.touch(Field::Description);
                        });
                    }
                />
                <FieldError message=Signal::derive(move || error_for(Field::Description)) />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="task-priority">"Priority"</label>
                    <select
                        id="task-priority"
                        on:change=move |ev| {
                            let parsed = event_target_value(&ev).parse::<Priority>();
                            form.update(|state| {
                                if let Ok(priority) = parsed {
                                    state.values.priority = priority;
                                }
                                state.touched.touch(Field::Priority);
                            });
                        }
                    >
                        {Priority::ALL
                            .into_iter()
                            .map(|priority| {
                                view! {
                                    <option
                                        value=priority.as_str()
                                        selected=move || form.with(|state| state.values.priority == priority)
                                    >
                                        {format!("{priority} Priority")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <FieldError message=Signal::derive(move || error_for(Field::Priority)) />
                </div>

                <div class="form-group">
                    <label for="task-due-date">"Due Date"</label>
                    <input
                        id="task-due-date"
                        type="date"
                        min=format_date(today)
                        prop:value=move || form.with(|state| state.values.due_date_input())
                        on:input=move |ev| {
                            form.update(|state| {
                                state.values.set_due_date_input(&event_target_value(&ev));
                                state.touched.touch(Field::DueDate);
                            });
                        }
                        on:blur=move |_| touch(Field::DueDate)
                    />
                    <FieldError message=Signal::derive(move || error_for(Field::DueDate)) />
                </div>
            </div>

            <button type="submit" class="btn-primary btn-block" disabled=move || !can_submit()>
                {move || if submitting() { "Creating..." } else { "Create Objective" }}
            </button>
        </form>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="field-error" role="alert">{text}</p> })
    }
}
