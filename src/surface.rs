//! Surface seams
//!
//! Traits the embedding viewer implements, plus the controller that
//! feeds synchronizer effects into them. Recording implementations are
//! provided for tests.

use crate::geometry::{BoxOrigin, OverlayRect};
use crate::span::SpanId;
use crate::sync::{Effect, Event, OverlaySync, Phase};

/// Trait for abstracting viewer navigation to enable testing
pub trait ViewerSurface {
    /// Scroll the viewer so the given page is in view.
    fn jump_to_page(&mut self, page_index: usize);
}

/// Trait for the overlay drawing layer.
///
/// A render call replaces whatever the renderer drew before; repeating
/// the same call must leave the surface unchanged.
pub trait OverlayRenderer {
    /// Draw these rectangles on the given page, dropping any previous
    /// overlay.
    fn render_overlay(&mut self, page_index: usize, rects: &[OverlayRect]);

    /// Remove the overlay entirely.
    fn clear_overlay(&mut self);
}

/// Couples the synchronizer to a concrete surface and renderer.
#[derive(Clone, Debug)]
pub struct OverlayController {
    sync: OverlaySync,
}

impl OverlayController {
    /// Create a controller around an idle synchronizer.
    #[must_use]
    pub fn new(origin: BoxOrigin) -> Self {
        Self { sync: OverlaySync::new(origin) }
    }

    /// Apply one event and perform its effects on the surface.
    pub fn handle(
        &mut self,
        event: Event,
        surface: &mut impl ViewerSurface,
        renderer: &mut impl OverlayRenderer,
    ) {
        for effect in self.sync.apply(event) {
            match effect {
                Effect::RenderOverlay { page_index, rects } => {
                    renderer.render_overlay(page_index, &rects);
                }
                Effect::ClearOverlay => renderer.clear_overlay(),
                Effect::JumpToPage(page_index) => surface.jump_to_page(page_index),
            }
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.sync.phase()
    }

    /// Currently selected span id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SpanId> {
        self.sync.selected()
    }

    /// The synchronizer, for state inspection.
    #[must_use]
    pub fn sync(&self) -> &OverlaySync {
        &self.sync
    }
}

/// Recording surface for testing
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// Pages jumped to, in order.
    pub jumps: Vec<usize>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewerSurface for RecordingSurface {
    fn jump_to_page(&mut self, page_index: usize) {
        self.jumps.push(page_index);
    }
}

/// Recording renderer for testing; holds the overlay it was last asked
/// to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    /// Currently drawn overlay, if any.
    pub overlay: Option<(usize, Vec<OverlayRect>)>,
    /// Number of render calls.
    pub renders: usize,
    /// Number of clear calls.
    pub clears: usize,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverlayRenderer for RecordingRenderer {
    fn render_overlay(&mut self, page_index: usize, rects: &[OverlayRect]) {
        self.renders += 1;
        self.overlay = Some((page_index, rects.to_vec()));
    }

    fn clear_overlay(&mut self) {
        self.clears += 1;
        self.overlay = None;
    }
}
