//! Extracted text spans and batch ingestion
//!
//! The extraction backend returns one flat batch of spans per document.
//! Batches are immutable and replaced wholesale; ids are only unique
//! within one batch, so nothing keyed by id survives a replacement.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::metrics;

/// Stable identifier for one extracted span, unique within its batch.
///
/// Selection tracks ids, never displayed text: duplicate words are common
/// in any document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SpanId(pub String);

impl SpanId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of extracted text with its page and geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Stable identifier, assigned by the extractor or at ingestion.
    pub id: SpanId,
    /// Extracted string content.
    pub text: String,
    /// Bounding box in source coordinates.
    pub bbox: BoundingBox,
    /// Zero-based page the span belongs to.
    pub page_index: usize,
}

/// Wire record as the extraction backend emits it.
///
/// `id` is optional on the wire: older extractors ship only text, box,
/// and page, and ingestion assigns the id instead.
#[derive(Clone, Debug, Deserialize)]
pub struct ExtractedSpan {
    pub id: Option<String>,
    pub text: String,
    pub bbox: Vec<f32>,
    pub page: usize,
}

/// Counts from one ingestion pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Spans accepted into the batch.
    pub accepted: usize,
    /// Records dropped for missing or non-finite geometry.
    pub dropped_geometry: usize,
    /// Ids seen more than once; the batch keeps every record and lookup
    /// takes the first.
    pub duplicate_ids: usize,
}

/// Immutable whole-document extraction result, in reading order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanBatch {
    spans: Vec<TextSpan>,
}

impl SpanBatch {
    #[must_use]
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Ingest wire records: assign ids where missing, drop records
    /// without usable geometry, count duplicate ids.
    pub fn from_records(records: Vec<ExtractedSpan>) -> (Self, IngestReport) {
        let mut spans = Vec::with_capacity(records.len());
        let mut report = IngestReport::default();
        let mut seen = HashSet::new();

        for (ordinal, record) in records.into_iter().enumerate() {
            let bbox = match BoundingBox::from_slice(&record.bbox) {
                Some(bbox) if bbox.is_finite() => bbox,
                _ => {
                    report.dropped_geometry += 1;
                    continue;
                }
            };

            let id = match record.id {
                Some(id) => SpanId(id),
                None => SpanId(format!("span-{}-{}", record.page, ordinal)),
            };

            if !seen.insert(id.clone()) {
                report.duplicate_ids += 1;
            }

            spans.push(TextSpan {
                id,
                text: record.text,
                bbox,
                page_index: record.page,
            });
        }

        report.accepted = spans.len();

        if report.dropped_geometry > 0 {
            warn!(
                "ingest dropped {} span(s) without usable geometry",
                report.dropped_geometry
            );
            metrics::record_missing_geometry(report.dropped_geometry);
        }
        if report.duplicate_ids > 0 {
            warn!(
                "ingest saw {} duplicate span id(s); lookup keeps the first",
                report.duplicate_ids
            );
            metrics::record_duplicate_identity(report.duplicate_ids);
        }

        (Self { spans }, report)
    }

    /// Parse a JSON extraction payload and ingest it.
    pub fn from_json(payload: &str) -> Result<(Self, IngestReport), serde_json::Error> {
        let records: Vec<ExtractedSpan> = serde_json::from_str(payload)?;
        Ok(Self::from_records(records))
    }

    /// First span with the given id, if any.
    #[must_use]
    pub fn find(&self, id: &SpanId) -> Option<&TextSpan> {
        self.spans.iter().find(|span| &span.id == id)
    }

    /// All spans in reading order.
    #[must_use]
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
