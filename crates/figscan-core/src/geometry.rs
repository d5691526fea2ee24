/// Bounding box with top-left origin coordinate system.
///
/// Coordinates follow pdfplumber convention:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// True if the interiors of the two boxes intersect.
    ///
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.top < other.bottom && self.bottom > other.top
    }
}

/// True if `bbox` overlaps at least one of `boxes`.
pub fn overlaps_any(bbox: &BBox, boxes: &[BBox]) -> bool {
    boxes.iter().any(|other| bbox.overlaps(other))
}
