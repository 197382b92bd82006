//! Coordinate projection between extraction space and overlay space
//!
//! Extraction backends report span geometry in page coordinates whose
//! origin and axis direction depend on the producer; the overlay surface
//! draws in top-left-origin coordinates scaled by the current zoom.

use serde::Serialize;

/// Vertical orientation of the source coordinate space.
///
/// Fixed configuration, never inferred from data. PDF content streams put
/// the origin at the bottom-left with y growing upward; OCR and web-style
/// producers report top-left boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxOrigin {
    /// Origin at the top-left, y grows downward.
    TopLeft,
    /// Origin at the bottom-left, y grows upward. Projection needs the
    /// page height to flip into overlay space.
    BottomLeft,
}

/// A span bounding box in source coordinates.
///
/// Carries two x values and two y values with no ordering promise between
/// the members of a pair: producers disagree on `[l,t,r,b]` vs
/// `[l,b,r,t]`, so projection normalizes each axis with min/max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Build from a wire slice. Returns `None` when fewer than four
    /// numbers are present; extra numbers are ignored.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [x0, y0, x1, y1, ..] => Some(Self::new(*x0, *y0, *x1, *y1)),
            _ => None,
        }
    }

    /// True when all four coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

/// Rectangle in overlay space: top-left origin, zoom already applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverlayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Why a box could not be projected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    /// The box or scale holds non-finite values.
    #[error("bounding box has non-finite coordinates")]
    InvalidBox,

    /// Bottom-left sources need the page height, and the rendering
    /// surface has not reported it yet.
    #[error("page height not reported yet")]
    PageHeightUnknown,
}

/// Project a source-space box into overlay space.
///
/// Both coordinate pairs are normalized with min/max after the optional
/// vertical flip, so unordered input stays valid. Zero-area output is
/// legitimate; the renderer decides whether to draw it.
pub fn project_box(
    bbox: BoundingBox,
    origin: BoxOrigin,
    scale: f32,
    page_height: Option<f32>,
) -> Result<OverlayRect, ProjectError> {
    if !bbox.is_finite() || !scale.is_finite() {
        return Err(ProjectError::InvalidBox);
    }

    // PDF: origin at bottom-left, y increases upward.
    // Overlay: origin at top-left, y increases downward.
    let (ya, yb) = match origin {
        BoxOrigin::TopLeft => (bbox.y0, bbox.y1),
        BoxOrigin::BottomLeft => {
            let Some(height) = page_height else {
                return Err(ProjectError::PageHeightUnknown);
            };
            (height - bbox.y0, height - bbox.y1)
        }
    };

    let x_min = bbox.x0.min(bbox.x1);
    let x_max = bbox.x0.max(bbox.x1);
    let y_min = ya.min(yb);
    let y_max = ya.max(yb);

    Ok(OverlayRect {
        x: x_min * scale,
        y: y_min * scale,
        width: (x_max - x_min) * scale,
        height: (y_max - y_min) * scale,
    })
}

/// Rescale a box measured on a rendered raster image into page
/// coordinates.
///
/// The OCR fallback path reports geometry in bitmap pixels; each axis is
/// scaled by `page / raster` to recover page units. Raster geometry is
/// top-left-origin, so the result pairs with [`BoxOrigin::TopLeft`].
#[must_use]
pub fn page_box_from_raster(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    raster_size: (f32, f32),
    page_size: (f32, f32),
) -> BoundingBox {
    let sx = page_size.0 / raster_size.0;
    let sy = page_size.1 / raster_size.1;
    BoundingBox::new(x * sx, y * sy, (x + width) * sx, (y + height) * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_left_box_flips_into_overlay_space() {
        let bbox = BoundingBox::new(72.0, 720.0, 300.0, 700.0);
        let rect = project_box(bbox, BoxOrigin::BottomLeft, 1.0, Some(792.0)).unwrap();

        assert_eq!(rect.x, 72.0);
        assert_eq!(rect.y, 72.0);
        assert_eq!(rect.width, 228.0);
        assert_eq!(rect.height, 20.0);
    }

    #[test]
    fn scale_applies_uniformly_to_position_and_size() {
        let bbox = BoundingBox::new(72.0, 720.0, 300.0, 700.0);
        let rect = project_box(bbox, BoxOrigin::BottomLeft, 2.0, Some(792.0)).unwrap();

        assert_eq!(rect.x, 144.0);
        assert_eq!(rect.y, 144.0);
        assert_eq!(rect.width, 456.0);
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn swapped_coordinate_pairs_project_identically() {
        let ordered = BoundingBox::new(72.0, 720.0, 300.0, 700.0);
        let swapped = BoundingBox::new(300.0, 700.0, 72.0, 720.0);

        let a = project_box(ordered, BoxOrigin::BottomLeft, 1.0, Some(792.0)).unwrap();
        let b = project_box(swapped, BoxOrigin::BottomLeft, 1.0, Some(792.0)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn normalization_is_idempotent() {
        let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        let rect = project_box(bbox, BoxOrigin::TopLeft, 1.0, None).unwrap();

        let renormalized = BoundingBox::new(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y + rect.height,
        );
        let again = project_box(renormalized, BoxOrigin::TopLeft, 1.0, None).unwrap();

        assert_eq!(rect, again);
    }

    #[test]
    fn top_left_sources_do_not_need_page_height() {
        let bbox = BoundingBox::new(10.0, 20.0, 110.0, 45.0);
        let rect = project_box(bbox, BoxOrigin::TopLeft, 1.0, None).unwrap();

        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 25.0);
    }

    #[test]
    fn bottom_left_without_page_height_defers() {
        let bbox = BoundingBox::new(72.0, 720.0, 300.0, 700.0);
        let result = project_box(bbox, BoxOrigin::BottomLeft, 1.0, None);

        assert_eq!(result, Err(ProjectError::PageHeightUnknown));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let bbox = BoundingBox::new(f32::NAN, 0.0, 10.0, 10.0);
        let result = project_box(bbox, BoxOrigin::TopLeft, 1.0, None);

        assert_eq!(result, Err(ProjectError::InvalidBox));
    }

    #[test]
    fn zero_area_boxes_are_valid_output() {
        let bbox = BoundingBox::new(50.0, 30.0, 50.0, 30.0);
        let rect = project_box(bbox, BoxOrigin::TopLeft, 3.0, None).unwrap();

        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.x, 150.0);
    }

    #[test]
    fn dimensions_never_go_negative() {
        let boxes = [
            BoundingBox::new(300.0, 700.0, 72.0, 720.0),
            BoundingBox::new(72.0, 720.0, 300.0, 700.0),
            BoundingBox::new(0.0, 0.0, 0.0, 792.0),
        ];

        for bbox in boxes {
            for origin in [BoxOrigin::TopLeft, BoxOrigin::BottomLeft] {
                let rect = project_box(bbox, origin, 1.5, Some(792.0)).unwrap();
                assert!(rect.width >= 0.0, "negative width for {bbox:?}");
                assert!(rect.height >= 0.0, "negative height for {bbox:?}");
            }
        }
    }

    #[test]
    fn short_wire_slices_are_refused() {
        assert!(BoundingBox::from_slice(&[1.0, 2.0, 3.0]).is_none());
        assert!(BoundingBox::from_slice(&[]).is_none());

        let bbox = BoundingBox::from_slice(&[1.0, 2.0, 3.0, 4.0, 99.0]).unwrap();
        assert_eq!(bbox, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn raster_box_rescales_to_page_units() {
        let bbox = page_box_from_raster(10.0, 20.0, 30.0, 40.0, (100.0, 200.0), (400.0, 800.0));

        assert_eq!(bbox, BoundingBox::new(40.0, 80.0, 160.0, 240.0));
    }
}
