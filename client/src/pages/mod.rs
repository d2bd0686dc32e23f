//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, fetches, form state) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod article;
pub mod article_create;
pub mod login;
pub mod user;
