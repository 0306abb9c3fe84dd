//! Record store contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the storage capability the services are constructed with.
//! - Isolate SQLite query details from query and quiz logic.
//!
//! # Invariants
//! - Every listing is ordered by ascending id.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod question_repo;
