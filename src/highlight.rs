//! Highlight derivation
//!
//! Turns the extracted span set plus the current selection into overlay
//! rectangles. Pure: the same spans, selection, and viewport always
//! produce the same output.

use std::collections::HashSet;

use log::warn;
use serde::Serialize;

use crate::geometry::{self, BoxOrigin, OverlayRect, ProjectError};
use crate::selection::Selection;
use crate::span::{SpanBatch, SpanId};
use crate::viewport::Viewport;

/// Overlay rectangles for one selected span.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Highlight {
    /// Page the rectangles belong to.
    pub page_index: usize,
    /// Rectangles in overlay space.
    pub rects: Vec<OverlayRect>,
    /// Span the highlight was derived from.
    pub span_id: SpanId,
}

/// Result of one derivation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedHighlights {
    /// Highlights ready to draw.
    pub ready: Vec<Highlight>,
    /// Pages whose height the projection still needs; selected spans on
    /// them are held back until the surface reports it.
    pub pending_pages: Vec<usize>,
}

impl DerivedHighlights {
    /// True when nothing is ready and nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.pending_pages.is_empty()
    }

    /// Page the overlay belongs on: the first ready or pending page.
    #[must_use]
    pub fn target_page(&self) -> Option<usize> {
        self.ready
            .first()
            .map(|highlight| highlight.page_index)
            .or_else(|| self.pending_pages.first().copied())
    }
}

/// Derive the overlay rectangles for the current selection.
///
/// The output is exactly the selected subset of `batch` projected through
/// the viewport: an empty selection, or an id absent from the batch,
/// yields an empty result. A span id appearing more than once resolves to
/// the first match. Spans with unusable geometry are skipped and logged;
/// spans whose page height is unknown land in `pending_pages`.
#[must_use]
pub fn derive_highlights(
    batch: &SpanBatch,
    selection: &Selection,
    viewport: &Viewport,
    origin: BoxOrigin,
) -> DerivedHighlights {
    let mut derived = DerivedHighlights::default();
    if selection.is_empty() {
        return derived;
    }

    let mut seen: HashSet<&SpanId> = HashSet::new();
    for span in batch.spans() {
        if !selection.is_selected(&span.id) {
            continue;
        }
        if !seen.insert(&span.id) {
            warn!("span id {} appears more than once; keeping the first match", span.id);
            continue;
        }

        let page_height = viewport.page_height(span.page_index);
        match geometry::project_box(span.bbox, origin, viewport.zoom(), page_height) {
            Ok(rect) => derived.ready.push(Highlight {
                page_index: span.page_index,
                rects: vec![rect],
                span_id: span.id.clone(),
            }),
            Err(ProjectError::PageHeightUnknown) => {
                if !derived.pending_pages.contains(&span.page_index) {
                    derived.pending_pages.push(span.page_index);
                }
            }
            Err(ProjectError::InvalidBox) => {
                warn!("span {} has unusable geometry; no highlight", span.id);
            }
        }
    }

    derived
}
