//! Scroll-spy rules.
//!
//! # Responsibility
//! - Decide which section is active from current section geometry.
//! - Decide whether the page has scrolled far enough to restyle the nav bar.
//!
//! # Invariants
//! - All functions are pure: same geometry in, same answer out.
//! - Scan order is page order; the first straddling section wins.
//! - No match keeps the previous section (sticky), never resets to a default.

use crate::model::section::SectionId;
use crate::model::viewport::SectionRect;

/// Returns whether `scroll_y` is strictly past `threshold`.
pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Returns whether `rect` crosses the horizontal reference `line`.
///
/// Both edges are inclusive.
pub fn straddles(rect: SectionRect, line: f64) -> bool {
    rect.top <= line && rect.bottom >= line
}

/// Finds the first section, in page order, straddling `line`.
///
/// `rect_of` returns `None` for sections the layout could not measure; those
/// are skipped.
pub fn find_active_section<F>(rect_of: F, line: f64) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<SectionRect>,
{
    SectionId::ALL
        .into_iter()
        .find(|section| rect_of(*section).is_some_and(|rect| straddles(rect, line)))
}

/// Applies the sticky rule to a scan result.
pub fn resolve_active_section(previous: SectionId, candidate: Option<SectionId>) -> SectionId {
    candidate.unwrap_or(previous)
}
