pub mod test_helpers {
    use crate::geometry::BoundingBox;
    use crate::span::{SpanBatch, SpanId, TextSpan};
    use crate::sync::Event;

    /// Build a span with the given id, page, and box corners.
    pub fn make_span(id: &str, page_index: usize, bbox: [f32; 4]) -> TextSpan {
        TextSpan {
            id: SpanId::new(id),
            text: id.to_string(),
            bbox: BoundingBox::new(bbox[0], bbox[1], bbox[2], bbox[3]),
            page_index,
        }
    }

    /// Build a batch from (id, page, box) triples.
    pub fn make_batch(spans: &[(&str, usize, [f32; 4])]) -> SpanBatch {
        SpanBatch::new(
            spans
                .iter()
                .map(|(id, page_index, bbox)| make_span(id, *page_index, *bbox))
                .collect(),
        )
    }

    /// Builder for event sequences driving the synchronizer
    pub struct ScenarioBuilder {
        events: Vec<Event>,
    }

    impl ScenarioBuilder {
        pub fn new() -> Self {
            Self { events: Vec::new() }
        }

        /// Replace the extraction batch
        pub fn load_batch(mut self, batch: SpanBatch) -> Self {
            self.events.push(Event::BatchReplaced(batch));
            self
        }

        /// Report a page height from the surface
        pub fn report_height(mut self, page_index: usize, height: f32) -> Self {
            self.events.push(Event::PageHeightKnown { page_index, height });
            self
        }

        /// Click a span in the extraction list
        pub fn click(mut self, id: &str) -> Self {
            self.events.push(Event::SpanClicked(SpanId::new(id)));
            self
        }

        /// Change the viewer zoom
        pub fn zoom(mut self, scale: f32) -> Self {
            self.events.push(Event::ZoomChanged(scale));
            self
        }

        /// Scroll the viewer to a page
        pub fn scroll_to(mut self, page_index: usize) -> Self {
            self.events.push(Event::PageInView(page_index));
            self
        }

        /// Open a different document
        pub fn open_document(mut self) -> Self {
            self.events.push(Event::DocumentReplaced);
            self
        }

        /// Build the event sequence
        pub fn build(self) -> Vec<Event> {
            self.events
        }
    }

    impl Default for ScenarioBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
