pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod types;

pub use geometry::{
    ArcGeometry, ArcPath, PathCommand, angle_at, arc_path, is_large_arc, polar_to_cartesian,
};
pub use layout::{Segment, layout, layout_total};
pub use types::{DataPoint, Point};
