#![allow(dead_code)]

use portfolio_core::{
    ContentCatalog, RenderSurface, ScrollBehavior, SectionId, SectionLayout, SectionRect,
    ViewportState,
};
use std::collections::BTreeMap;

/// Layout double with settable geometry and a log of scroll requests.
#[derive(Debug, Default)]
pub struct FakeLayout {
    pub scroll_y: f64,
    pub rects: BTreeMap<SectionId, SectionRect>,
    pub scroll_requests: Vec<(SectionId, ScrollBehavior)>,
}

impl FakeLayout {
    /// Every section rendered, stacked one viewport (800px) apart at offset 0.
    pub fn all_sections() -> Self {
        let mut layout = Self::default();
        layout.place_stacked(0.0);
        layout
    }

    /// Lays sections out 800px tall each, shifted up by `scroll_y`.
    pub fn place_stacked(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.rects = SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                let top = index as f64 * 800.0 - scroll_y;
                (section, SectionRect::new(top, top + 800.0))
            })
            .collect();
    }

    /// Moves every section far below the reference line.
    pub fn place_offscreen(&mut self) {
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            let top = 2_000.0 + index as f64 * 800.0;
            self.rects.insert(section, SectionRect::new(top, top + 800.0));
        }
    }
}

impl SectionLayout for FakeLayout {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
        self.rects.get(&section).copied()
    }

    fn scroll_into_view(&mut self, section: SectionId, behavior: ScrollBehavior) -> bool {
        if !self.rects.contains_key(&section) {
            return false;
        }
        self.scroll_requests.push((section, behavior));
        true
    }
}

/// Surface double that keeps every rendered state.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<ViewportState>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&ViewportState> {
        self.frames.last()
    }
}

impl RenderSurface for RecordingSurface {
    fn render(&mut self, state: &ViewportState, _catalog: &ContentCatalog) {
        self.frames.push(*state);
    }
}
