//! Footprint geometry: pad arrays and clearance-aware outlines.
//!
//! Everything in this module is pure computation over millimetre coordinates
//! in footprint space. X grows to the right, Y grows downwards (the host's
//! screen convention), and the origin is the footprint anchor.
//!
//! # Components
//!
//! - [`pad`] - pad templates ([`PadSpec`]) and straight pad runs ([`PadArraySegment`])
//! - [`perimeter`] - the three-sided pad arrangement around the body
//! - [`body`] - nominal body and courtyard rectangles
//! - [`interval`] - ordered 1-D interval sets used for outline notching
//! - [`outline`] - silkscreen outline with pad clearance gaps

pub mod body;
pub mod interval;
pub mod outline;
pub mod pad;
pub mod perimeter;

pub use body::Body;
pub use interval::{Interval, IntervalSet};
pub use outline::{OutlineBuilder, OutlineSegment, Side};
pub use pad::{Axis, Pad, PadArraySegment, PadRotation, PadShape, PadSpec};
pub use perimeter::{PadParams, PerimeterLayout};

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X (mm).
    pub min_x: f64,
    /// Minimum Y (mm).
    pub min_y: f64,
    /// Maximum X (mm).
    pub max_x: f64,
    /// Maximum Y (mm).
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle of the given size centred on `centre`.
    #[must_use]
    pub fn centred_at(centre: Point, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min_x: centre.x - half_w,
            min_y: centre.y - half_h,
            max_x: centre.x + half_w,
            max_y: centre.y + half_h,
        }
    }

    /// Returns the rectangle grown by `margin` on all four sides.
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Returns the extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the centre point.
    #[must_use]
    pub fn centre(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
