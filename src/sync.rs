//! Selection and navigation synchronizer
//!
//! Owns the span batch, the selection, and the viewport, and turns
//! viewer events into overlay effects. Pure state machine: no I/O, no
//! rendering, callers wire the returned effects to their surface.

use log::warn;

use crate::geometry::{BoxOrigin, OverlayRect};
use crate::highlight;
use crate::metrics;
use crate::selection::Selection;
use crate::span::{SpanBatch, SpanId};
use crate::viewport::Viewport;

/// Where the synchronizer is in the highlight lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No selection, nothing drawn.
    Idle,
    /// A selection exists but its page height has not been reported yet.
    AwaitingPageHeight,
    /// A selection exists and its overlay is drawn.
    Highlighting,
}

/// Events the synchronizer reacts to.
#[derive(Clone, Debug)]
pub enum Event {
    /// The user clicked a span in the extraction list.
    SpanClicked(SpanId),
    /// The viewer zoom changed.
    ZoomChanged(f32),
    /// The rendering surface reported a page height in source units.
    PageHeightKnown { page_index: usize, height: f32 },
    /// The viewer scrolled to a page.
    PageInView(usize),
    /// A new extraction result replaced the current batch.
    BatchReplaced(SpanBatch),
    /// A different document was opened.
    DocumentReplaced,
}

/// Effects produced by state changes.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Draw these rectangles on the given page, replacing any previous
    /// overlay.
    RenderOverlay { page_index: usize, rects: Vec<OverlayRect> },
    /// Remove the overlay entirely.
    ClearOverlay,
    /// Scroll the viewer to a page.
    JumpToPage(usize),
}

/// Synchronizes extraction results, selection, and the viewer.
#[derive(Clone, Debug)]
pub struct OverlaySync {
    /// Coordinate convention of incoming bounding boxes.
    origin: BoxOrigin,
    /// Current extraction result.
    batch: SpanBatch,
    /// Currently selected span, if any.
    selection: Selection,
    /// Zoom factor and reported page heights.
    viewport: Viewport,
    /// Page the viewer is currently scrolled to.
    page_in_view: usize,
    /// Lifecycle phase, recomputed on every overlay refresh.
    phase: Phase,
    /// Overlay last handed to the renderer, for change detection.
    last_overlay: Option<(usize, Vec<OverlayRect>)>,
}

impl OverlaySync {
    /// Create an idle synchronizer with an empty batch.
    #[must_use]
    pub fn new(origin: BoxOrigin) -> Self {
        Self {
            origin,
            batch: SpanBatch::default(),
            selection: Selection::new(),
            viewport: Viewport::new(),
            page_in_view: 0,
            phase: Phase::Idle,
            last_overlay: None,
        }
    }

    /// Apply an event and return the resulting effects.
    #[must_use]
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::SpanClicked(id) => {
                if self.selection.is_selected(&id) {
                    self.selection.clear();
                    self.refresh_overlay(&mut effects);
                } else if let Some(span) = self.batch.find(&id) {
                    let page_index = span.page_index;
                    self.selection.click(id);
                    if page_index != self.page_in_view {
                        self.page_in_view = page_index;
                        effects.push(Effect::JumpToPage(page_index));
                    }
                    self.refresh_overlay(&mut effects);
                } else {
                    warn!("clicked span {} is not in the current batch; treating as no selection", id);
                    metrics::record_stale_selection();
                    self.selection.clear();
                    self.refresh_overlay(&mut effects);
                }
            }

            Event::ZoomChanged(scale) => {
                let previous = self.viewport.zoom();
                self.viewport.set_zoom(scale);
                if (self.viewport.zoom() - previous).abs() > f32::EPSILON {
                    self.refresh_overlay(&mut effects);
                }
            }

            Event::PageHeightKnown { page_index, height } => {
                self.viewport.record_page_height(page_index, height);
                if !self.selection.is_empty() {
                    self.refresh_overlay(&mut effects);
                }
            }

            Event::PageInView(page_index) => {
                self.page_in_view = page_index;
            }

            Event::BatchReplaced(batch) => {
                self.batch = batch;
                self.selection.clear();
                self.refresh_overlay(&mut effects);
            }

            Event::DocumentReplaced => {
                self.batch = SpanBatch::default();
                self.selection.clear();
                self.viewport.reset_page_heights();
                self.page_in_view = 0;
                self.refresh_overlay(&mut effects);
            }
        }
        effects
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently selected span id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SpanId> {
        self.selection.selected()
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    /// Page the viewer is scrolled to.
    #[must_use]
    pub fn page_in_view(&self) -> usize {
        self.page_in_view
    }

    /// Current extraction batch.
    #[must_use]
    pub fn batch(&self) -> &SpanBatch {
        &self.batch
    }

    /// Re-derive the overlay, update the phase, and emit render effects
    /// when the drawn overlay actually changed.
    fn refresh_overlay(&mut self, effects: &mut Vec<Effect>) {
        let derived = highlight::derive_highlights(
            &self.batch,
            &self.selection,
            &self.viewport,
            self.origin,
        );

        self.phase = if self.selection.is_empty() {
            Phase::Idle
        } else if !derived.ready.is_empty() {
            Phase::Highlighting
        } else if !derived.pending_pages.is_empty() {
            Phase::AwaitingPageHeight
        } else {
            Phase::Idle
        };

        let target = derived
            .ready
            .first()
            .map(|highlight| (highlight.page_index, highlight.rects.clone()));
        if target != self.last_overlay {
            match &target {
                Some((page_index, rects)) => effects.push(Effect::RenderOverlay {
                    page_index: *page_index,
                    rects: rects.clone(),
                }),
                None => effects.push(Effect::ClearOverlay),
            }
            self.last_overlay = target;
        }
    }
}
