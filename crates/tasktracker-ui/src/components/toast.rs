//! Toaster: transient notifications in the bottom-right corner

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::{ToastKind, Toasts};

/// Create the toast queue and share it with descendants.
pub fn provide_toasts() -> RwSignal<Toasts> {
    let toasts = RwSignal::new(Toasts::default());
    provide_context(toasts);
    toasts
}

/// The shared toast queue, or a detached one when no provider is mounted.
pub fn use_toasts() -> RwSignal<Toasts> {
    use_context::<RwSignal<Toasts>>().unwrap_or_else(|| RwSignal::new(Toasts::default()))
}

/// Show a toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<Toasts>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    if let Some(id) = toasts.try_update(|queue| queue.push(kind, message)) {
        Timeout::new(Toasts::DISMISS_AFTER_MS, move || {
            toasts.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            role="status"
                            on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
