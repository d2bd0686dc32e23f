//! Client-side state owned by pages and shared via Leptos context.

pub mod detail;
pub mod draft;
pub mod listing;
pub mod session;
