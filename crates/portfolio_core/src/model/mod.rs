//! View-local domain model for the portfolio page.
//!
//! # Responsibility
//! - Define section identity and the single mutable viewport state.
//!
//! # Invariants
//! - Nothing here is persisted; every value lives for one page lifetime.

pub mod section;
pub mod viewport;
