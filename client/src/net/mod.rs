//! Networking modules for the upstream REST APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` signs users in against the auth provider, `news` reads the two
//! news providers, `types` holds the wire schemas and their validated domain
//! forms, and `error` classifies every failure.

pub mod error;
pub mod identity;
pub mod news;
pub mod types;
