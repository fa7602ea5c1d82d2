//! Static page content.
//!
//! The catalog is read-only configuration data: it is built once, never
//! mutated, and handed to the renderer alongside viewport state.

pub mod builtin;
pub mod catalog;
