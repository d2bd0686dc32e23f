//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod debounce;
pub mod format;
pub mod guard;
pub mod notify;
pub mod pagination;
pub mod storage;
