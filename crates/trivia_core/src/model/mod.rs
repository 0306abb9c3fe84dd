//! Catalog domain model.
//!
//! # Responsibility
//! - Define the question and category records owned by the record store.
//! - Define typed request payloads accepted by the upward interface.
//!
//! # Invariants
//! - Ids are assigned by the store and never reused by the core.
//! - Categories are read-only once seeded.

pub mod category;
pub mod question;
pub mod request;
