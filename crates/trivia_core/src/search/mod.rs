//! Question text matching.
//!
//! # Responsibility
//! - Provide the case folding used by substring search, both in Rust and
//!   as a SQL function on catalog connections.

pub mod fold;
