//! Page controller.
//!
//! # Responsibility
//! - Own the single `ViewportState` instance and apply host signals to it.
//! - Expose the navigate action shared by every navigation control.
//! - Push state to the render surface after each change.
//!
//! # Invariants
//! - The controller is the only writer of `ViewportState`.
//! - Every handler recomputes from current host inputs, never from deltas.
//! - Pointer updates never touch navigation state.
//! - A section missing from the rendered tree makes navigation a silent no-op.

use crate::config::PageConfig;
use crate::content::builtin::builtin_catalog;
use crate::content::catalog::ContentCatalog;
use crate::controller::host::{RenderSurface, ScrollBehavior, SectionLayout};
use crate::model::section::{parse_section_id, SectionId, SectionIdError};
use crate::model::viewport::{PointerPosition, ViewportState};
use crate::spy::{find_active_section, is_past_threshold, resolve_active_section};
use log::debug;

/// Result of one navigate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// Scroll was issued and state updated.
    Scrolled,
    /// Target element was not rendered; nothing changed.
    SectionMissing,
}

/// Owner of interactive page state.
pub struct PageController<'c, L: SectionLayout, R: RenderSurface> {
    layout: L,
    surface: R,
    catalog: &'c ContentCatalog,
    config: PageConfig,
    state: ViewportState,
}

impl<L: SectionLayout, R: RenderSurface> PageController<'static, L, R> {
    /// Creates a controller over the built-in catalog with default config.
    pub fn new(layout: L, surface: R) -> Self {
        Self::with_catalog(layout, surface, builtin_catalog(), PageConfig::default())
    }
}

impl<'c, L: SectionLayout, R: RenderSurface> PageController<'c, L, R> {
    /// Creates a controller in the page-load state (home, menu closed,
    /// not scrolled, pointer at origin).
    pub fn with_catalog(
        layout: L,
        surface: R,
        catalog: &'c ContentCatalog,
        config: PageConfig,
    ) -> Self {
        Self {
            layout,
            surface,
            catalog,
            config,
            state: ViewportState::default(),
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c ContentCatalog {
        self.catalog
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable layout access for hosts that update geometry in place.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Pushes the current state to the surface without changing it.
    pub fn render_now(&mut self) {
        self.surface.render(&self.state, self.catalog);
    }

    /// Handles one host scroll event.
    ///
    /// Updates the nav bar threshold flag and re-runs scroll-spy against the
    /// reference line. Without a straddling section the active section stays
    /// as it was.
    pub fn on_scroll(&mut self) {
        let offset = self.layout.scroll_offset();
        self.state.has_scrolled_past_threshold =
            is_past_threshold(offset, self.config.scroll_threshold_px);

        let layout = &self.layout;
        let candidate =
            find_active_section(|section| layout.section_rect(section), self.config.spy_line_px);
        self.state.active_section = resolve_active_section(self.state.active_section, candidate);

        self.render_now();
    }

    /// Records the pointer position for the cursor overlay.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.state.pointer = PointerPosition { x, y };
        self.render_now();
    }

    /// Opens the mobile menu when closed, closes it when open.
    pub fn toggle_menu(&mut self) {
        self.state.is_menu_open = !self.state.is_menu_open;
        self.render_now();
    }

    /// Smooth-scrolls to `section` and marks it active right away.
    ///
    /// The active section is set before the scroll animation settles, and the
    /// menu is closed even when it already was. A later scroll event may
    /// recompute a different section mid-animation.
    pub fn navigate_to(&mut self, section: SectionId) -> NavigateOutcome {
        if !self.layout.scroll_into_view(section, ScrollBehavior::Smooth) {
            debug!(
                "event=navigate_skipped module=controller status=missing section={}",
                section
            );
            return NavigateOutcome::SectionMissing;
        }

        self.state.active_section = section;
        self.state.is_menu_open = false;
        self.render_now();
        NavigateOutcome::Scrolled
    }

    /// String-typed navigate entry for host callbacks.
    pub fn navigate_to_id(&mut self, section_id: &str) -> Result<NavigateOutcome, SectionIdError> {
        let section = parse_section_id(section_id)?;
        Ok(self.navigate_to(section))
    }

    /// Cursor overlay top-left corner for the current pointer.
    pub fn cursor_overlay_origin(&self) -> PointerPosition {
        self.state.cursor_overlay_origin(self.config.cursor_radius_px)
    }
}
