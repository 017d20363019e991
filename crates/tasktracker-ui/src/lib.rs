//! Leptos 0.7 CSR frontend for TaskTracker
//!
//! One page: a task grid with an "Add Task" dialog. Talks to the JSON API
//! served by `tasktracker-web` and validates input with the same schema the
//! API uses (`tasktracker-core`).
//!
//! ## Module Structure
//! - `app`: root component, shared context
//! - `router`: routes
//! - `pages`: top-level page components
//! - `components`: task list, form, card, dialog, toaster
//! - `state`: list and toast state containers
//! - `models`: form values and date helpers
//! - `api`: HTTP client for `/api/tasks`
//! - `error`: client error types

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
