//! Root application component

use leptos::prelude::*;

use crate::components::provide_toasts;
use crate::router::AppRouter;

/// Provides shared context (the toast queue) and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_toasts();

    view! {
        <div class="app-container">
            <AppRouter />
        </div>
    }
}
