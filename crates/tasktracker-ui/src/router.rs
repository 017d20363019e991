//! Router configuration
//!
//! The server returns `index.html` for any non-API path, so unknown routes
//! land here and render the 404 page client-side.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, NotFound};

/// Route paths
pub mod routes {
    pub const HOME: &str = "/";
}

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
            </Routes>
        </Router>
    }
}
