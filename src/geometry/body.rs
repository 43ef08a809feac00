//! Component body outline parameters.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// The package body and its outline rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    /// Body extent along Y (mm).
    pub width: f64,
    /// Body extent along X (mm).
    pub length: f64,
    /// Horizontal offset of the body centre from the footprint origin (mm).
    pub horizontal_offset: f64,
    /// Courtyard margin added on the left and right (mm).
    pub x_margin: f64,
    /// Courtyard margin added on the top and bottom (mm).
    pub y_margin: f64,
    /// Minimum distance between silkscreen and pad copper (mm).
    pub clearance: f64,
    /// Shortest silkscreen fragment worth drawing (mm).
    pub min_segment_length: f64,
}

impl Body {
    /// Returns the body centre.
    #[must_use]
    pub const fn centre(&self) -> Point {
        Point::new(self.horizontal_offset, 0.0)
    }

    /// Returns the nominal `length x width` body rectangle.
    #[must_use]
    pub fn nominal_rect(&self) -> Rect {
        Rect::centred_at(self.centre(), self.length, self.width)
    }

    /// Returns the courtyard: the body grown by the X and Y margins.
    #[must_use]
    pub fn courtyard_rect(&self) -> Rect {
        Rect::centred_at(
            self.centre(),
            2.0f64.mul_add(self.x_margin, self.length),
            2.0f64.mul_add(self.y_margin, self.width),
        )
    }
}
