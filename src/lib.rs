// Export modules for use in tests
pub mod geometry;
pub mod highlight;
pub mod metrics;
pub mod selection;
pub mod span;
pub mod surface;
pub mod sync;
pub mod viewport;

pub mod test_utils;

// Re-export the synchronizer components
pub use geometry::{BoundingBox, BoxOrigin, OverlayRect};
pub use sync::{Effect, Event, OverlaySync, Phase};
pub use surface::{OverlayController, OverlayRenderer, ViewerSurface};
