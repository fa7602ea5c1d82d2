//! Interactive page control.
//!
//! `page` owns viewport state, `host` names what the controller needs from
//! its environment, and `mount` scopes the global listeners to one view
//! lifetime.

pub mod host;
pub mod mount;
pub mod page;
