//! Modal dialog
//!
//! Rendered only while `open` is true. Clicking the overlay, the close button
//! or pressing Escape calls `on_close`; the owner decides what that means.

use leptos::prelude::*;

#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="dialog-overlay"
                on:click=move |_| on_close.run(())
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_close.run(());
                    }
                }
            >
                <div
                    class="dialog-content"
                    role="dialog"
                    aria-modal="true"
                    aria-label=title
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="dialog-header">
                        <h2 class="dialog-title">{title}</h2>
                        <button
                            type="button"
                            class="dialog-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </header>
                    <div class="dialog-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
