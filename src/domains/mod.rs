//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: Trello tools.

pub mod tools;
