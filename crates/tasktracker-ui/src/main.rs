//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM and mounts `App` to the document body.

use leptos::prelude::*;
use tasktracker_ui::App;

fn main() {
    // Panics show up in the browser console instead of as "unreachable"
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! { <App /> }
    });
}
