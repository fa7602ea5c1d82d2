//! Host bridge for the portfolio page core.

pub mod api;
