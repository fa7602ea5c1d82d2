//! Host environment contracts.
//!
//! The page never touches pixels or real listeners. A host (browser shell,
//! native shell, or a test double) implements these traits and the
//! controller drives it.

use crate::content::catalog::ContentCatalog;
use crate::model::section::SectionId;
use crate::model::viewport::{SectionRect, ViewportState};

/// How the host should animate a scroll-into-view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Read/scroll access to the host layout system.
pub trait SectionLayout {
    /// Current vertical scroll offset of the page, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Viewport-relative bounding box of a rendered section.
    ///
    /// Returns `None` when the section element is not in the rendered tree.
    fn section_rect(&self, section: SectionId) -> Option<SectionRect>;

    /// Asks the host to bring `section` into view.
    ///
    /// Fire-and-forget: returns as soon as the request is issued. Returns
    /// `false` when the section element cannot be located.
    fn scroll_into_view(&mut self, section: SectionId, behavior: ScrollBehavior) -> bool;
}

/// Declarative renderer fed on every state change.
pub trait RenderSurface {
    fn render(&mut self, state: &ViewportState, catalog: &ContentCatalog);
}

/// Render surface for headless use (smoke CLI, host shells that poll).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSurface;

impl RenderSurface for NoopSurface {
    fn render(&mut self, _state: &ViewportState, _catalog: &ContentCatalog) {}
}
