//! Page behavior constants.

use serde::{Deserialize, Serialize};

/// Scroll offset (px) past which the nav bar switches to its solid style.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Distance (px) of the scroll-spy reference line below the viewport top.
pub const DEFAULT_SPY_LINE_PX: f64 = 100.0;
/// Half the width of the decorative cursor ring.
pub const DEFAULT_CURSOR_RADIUS_PX: f64 = 16.0;

/// Tunables for one page controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll_threshold_px: f64,
    pub spy_line_px: f64,
    pub cursor_radius_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            spy_line_px: DEFAULT_SPY_LINE_PX,
            cursor_radius_px: DEFAULT_CURSOR_RADIUS_PX,
        }
    }
}
