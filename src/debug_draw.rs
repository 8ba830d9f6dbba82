use glam::*;
use tracing::trace;

use crate::bounding_box::BoundingBox;

/// A line-drawing facility supplied by whatever renders the scene.
pub trait LineDrawer {
    fn draw_line(&mut self, from: DVec2, to: DVec2);
}

impl BoundingBox {
    /// The four boundary segments: up the left edge, across the top, down the
    /// right edge, back along the bottom.
    pub fn edges(&self) -> [(DVec2, DVec2); 4] {
        let [a, b, c, d] = self.corners();
        [(a, b), (b, c), (c, d), (d, a)]
    }

    pub fn debug_draw<D: LineDrawer + ?Sized>(&self, drawer: &mut D) {
        if !self.is_valid() {
            trace!("skipping debug draw of invalid bounding box");
            return;
        }
        for (from, to) in self.edges() {
            drawer.draw_line(from, to);
        }
    }
}
