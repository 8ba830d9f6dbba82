use glam::*;

/// Whether a [`BoundingBox`] currently describes a region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Invalid,
    Valid,
}

/// A 2D axis-aligned bounding box.
///
/// A default box is `Invalid` and describes no space; its corners sit at the
/// origin. The first call to [`BoundingBox::expand_to_include`] turns it into
/// a single-point box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
    pub validity: Validity,
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a valid box from its corners.
    ///
    /// `min` must be the lower-left and `max` the upper-right corner. The
    /// ordering is not checked; every query works on the fields as given.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        BoundingBox {
            min,
            max,
            validity: Validity::Valid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn expand_to_include(&mut self, point: DVec2) {
        if !self.is_valid() {
            self.min = point;
            self.max = point;
            self.validity = Validity::Valid;
            return;
        }

        // A point below min cannot also be above max while min <= max.
        if point.x < self.min.x {
            self.min.x = point.x;
        } else if point.x > self.max.x {
            self.max.x = point.x;
        }

        if point.y < self.min.y {
            self.min.y = point.y;
        } else if point.y > self.max.y {
            self.max.y = point.y;
        }
    }

    /// Inclusive on every edge. Always false for an invalid box.
    pub fn contains(&self, point: DVec2) -> bool {
        if !self.is_valid() {
            return false;
        }
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns true when the boxes overlap or touch on both axes.
    ///
    /// Validity is not consulted: an invalid box behaves as a zero-area box
    /// at the origin.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
    }

    /// Corners in outline order, starting at `min` and going up the left edge.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            dvec2(self.min.x, self.max.y),
            self.max,
            dvec2(self.max.x, self.min.y),
        ]
    }
}

impl Extend<DVec2> for BoundingBox {
    fn extend<I: IntoIterator<Item = DVec2>>(&mut self, points: I) {
        for point in points {
            self.expand_to_include(point);
        }
    }
}

impl FromIterator<DVec2> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = DVec2>>(points: I) -> Self {
        let mut bounding_box = BoundingBox::empty();
        bounding_box.extend(points);
        bounding_box
    }
}
