//! Transient view-local state owned by the page controller.
//!
//! # Invariants
//! - `active_section` is always one of the fixed sections; the type rules out
//!   an empty value.
//! - Pointer tracking never feeds into navigation fields.

use crate::model::section::SectionId;
use serde::{Deserialize, Serialize};

/// Pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Section bounding box as reported by the layout system.
///
/// Values are viewport-relative pixels; `top` may be negative once a section
/// has scrolled partly off screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Navigation bar background mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavBarStyle {
    /// Page is at (or near) the top; the hero shows through.
    Transparent,
    /// Page has scrolled past the threshold; opaque, blurred, shadowed bar.
    Solid,
}

/// Interactive state of the single-page portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub active_section: SectionId,
    pub is_menu_open: bool,
    pub has_scrolled_past_threshold: bool,
    pub pointer: PointerPosition,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            is_menu_open: false,
            has_scrolled_past_threshold: false,
            pointer: PointerPosition::default(),
        }
    }
}

impl ViewportState {
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    pub fn nav_bar_style(&self) -> NavBarStyle {
        if self.has_scrolled_past_threshold {
            NavBarStyle::Solid
        } else {
            NavBarStyle::Transparent
        }
    }

    /// Top-left corner of the decorative cursor ring centred on the pointer.
    pub fn cursor_overlay_origin(&self, radius: f64) -> PointerPosition {
        PointerPosition {
            x: self.pointer.x - radius,
            y: self.pointer.y - radius,
        }
    }
}
