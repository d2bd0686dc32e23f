//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing rows, cards, and page chrome. They receive data
//! and callbacks from pages; only `hero` and `sidebar` read the session
//! context directly.

pub mod article_card;
pub mod article_table;
pub mod checking_session;
pub mod footer;
pub mod hero;
pub mod pagination_bar;
pub mod sidebar;
