//! 404 page

use leptos::prelude::*;

use crate::router::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href=routes::HOME>"Back to your tasks"</a>
        </div>
    }
}
