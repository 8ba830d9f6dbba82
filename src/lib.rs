//! A 2D axis-aligned bounding box for collision pipelines.
//!
//! ```
//! use aabb_2d::BoundingBox;
//! use glam::dvec2;
//!
//! let mut bb = BoundingBox::empty();
//! bb.expand_to_include(dvec2(2.0, 3.0));
//! bb.expand_to_include(dvec2(-1.0, 5.0));
//! assert!(bb.contains(dvec2(0.0, 4.0)));
//! ```

pub mod bounding_box;
pub mod debug_draw;

pub use bounding_box::{BoundingBox, Validity};
pub use debug_draw::LineDrawer;
