//! Catalog use-case services.
//!
//! # Responsibility
//! - Compose store calls into the read, mutate and quiz operations exposed
//!   to the HTTP boundary.
//! - Classify every failure into one [`error::ErrorKind`].
//!
//! # Invariants
//! - Services hold no catalog state; each call reads the store it was
//!   constructed with.

pub mod error;
pub mod pagination;
pub mod question_service;
pub mod quiz_service;
