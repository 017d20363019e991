//! Home page: product header and the task list

use leptos::prelude::*;

use crate::components::{TaskList, Toaster};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="home-page">
            <div class="page-container">
                <header class="page-header">
                    <div class="brand-mark" aria-hidden="true">"✓"</div>
                    <h1>"TaskTracker"</h1>
                    <p class="tagline">
                        "A refined workspace for your daily objectives. "
                        "Focus on what matters most, one task at a time."
                    </p>
                </header>
                <section class="page-content">
                    <TaskList />
                </section>
            </div>
            <Toaster />
        </main>
    }
}
