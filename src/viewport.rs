//! Zoom scale and per-page height table
//!
//! Page heights arrive from the rendering surface one page at a time, in
//! any order. Until a page's height lands, bottom-left geometry on that
//! page cannot be projected.

use std::collections::HashMap;

use log::warn;

/// Viewer parameters the projection depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    page_heights: HashMap<usize, f32>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            page_heights: HashMap::new(),
        }
    }
}

impl Viewport {
    /// Smallest accepted zoom; requests below it are clamped up.
    pub const MIN_ZOOM: f32 = 0.01;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom scale, always finite and strictly positive.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom scale, clamped through [`Self::clamp_zoom`].
    pub fn set_zoom(&mut self, scale: f32) {
        self.zoom = Self::clamp_zoom(scale);
    }

    /// Record a page height reported by the rendering surface.
    ///
    /// Entries are only added or updated, never removed, while a document
    /// stays loaded. Non-positive or non-finite reports are ignored.
    pub fn record_page_height(&mut self, page_index: usize, height: f32) {
        if !height.is_finite() || height <= 0.0 {
            warn!("ignoring unusable height {height} for page {page_index}");
            return;
        }
        self.page_heights.insert(page_index, height);
    }

    /// Height of the given page, once the surface has reported it.
    #[must_use]
    pub fn page_height(&self, page_index: usize) -> Option<f32> {
        self.page_heights.get(&page_index).copied()
    }

    /// Number of pages with a known height.
    #[must_use]
    pub fn known_pages(&self) -> usize {
        self.page_heights.len()
    }

    /// Forget all page heights. Only meaningful when the surface loads a
    /// new document.
    pub fn reset_page_heights(&mut self) {
        self.page_heights.clear();
    }

    /// Clamp a zoom request to a finite, strictly positive scale,
    /// handling NaN/Inf.
    #[must_use]
    pub fn clamp_zoom(scale: f32) -> f32 {
        if !scale.is_finite() {
            1.0
        } else {
            scale.max(Self::MIN_ZOOM)
        }
    }
}
