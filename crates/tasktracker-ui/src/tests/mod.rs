//! Behavioral tests for UI state and models
//!
//! BDD-style tests using given-when-then naming. Components need a browser;
//! the logic they delegate to is tested here natively.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]


use chrono::NaiveDate;
use serde_json::json;
use tasktracker_core::Task;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A stored task as the API would return it.
fn task(n: u32, title: &str) -> Task {
    serde_json::from_value(json!({
        "id": format!("00000000-0000-4000-8000-{n:012}"),
        "title": title,
        "description": null,
        "priority": "Medium",
        "due_date": "2025-03-12",
        "status": "Pending",
        "created_at": format!("2025-03-01T10:00:{:02}Z", n % 60),
    }))
    .expect("valid task json")
}
