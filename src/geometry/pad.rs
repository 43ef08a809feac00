//! Pad templates and straight pad arrays.
//!
//! A [`PadSpec`] describes the copper of one pad type independent of where it
//! is placed. A [`PadArraySegment`] places a run of identical pads along one
//! axis and numbers them from an explicit first designator, so several runs can
//! share a footprint without a shared counter.

use std::ops::Range;

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// Pad shape type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadShape {
    /// Rectangular pad.
    #[default]
    Rectangle,
}

/// Pad rotation. Only quarter turns that keep the pad axis-aligned are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "f64")]
pub enum PadRotation {
    /// Pad length runs along Y.
    #[default]
    Deg0,
    /// Pad length runs along X.
    Deg90,
}

impl PadRotation {
    /// Returns the rotation angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => 90.0,
        }
    }
}

impl From<PadRotation> for f64 {
    fn from(rotation: PadRotation) -> Self {
        rotation.degrees()
    }
}

/// Geometric description of one pad type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PadSpec {
    /// Pad length in mm, including any hand-solder extension.
    pub length: f64,
    /// Pad width in mm.
    pub width: f64,
    /// Pad shape.
    pub shape: PadShape,
    /// Pad rotation.
    pub rotation: PadRotation,
}

impl PadSpec {
    /// Builds a rectangular SMD pad template.
    ///
    /// The hand-solder margin extends the pad length only; the width is used
    /// as given.
    #[must_use]
    pub fn smd(length: f64, width: f64, handsolder_margin: f64, rotation: PadRotation) -> Self {
        Self {
            length: length + handsolder_margin,
            width,
            shape: PadShape::Rectangle,
            rotation,
        }
    }

    /// Returns the pad's `(x, y)` extent after rotation.
    #[must_use]
    pub const fn extent(&self) -> (f64, f64) {
        match self.rotation {
            PadRotation::Deg0 => (self.width, self.length),
            PadRotation::Deg90 => (self.length, self.width),
        }
    }
}

/// A placed, numbered pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pad {
    /// Pad centre (mm).
    pub position: Point,
    /// Pad geometry.
    pub spec: PadSpec,
    /// 1-based pad number.
    pub designator: u32,
}

impl Pad {
    /// Returns the axis-aligned bounding box of the pad copper.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let (size_x, size_y) = self.spec.extent();
        Rect::centred_at(self.position, size_x, size_y)
    }

    /// Returns the bounding box inflated by `clearance` on every side.
    #[must_use]
    pub fn clearance_zone(&self, clearance: f64) -> Rect {
        self.bounding_box().inflate(clearance)
    }
}

/// The axis a pad array advances along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pads advance along X.
    Horizontal,
    /// Pads advance along Y.
    Vertical,
}

/// A straight run of pads.
///
/// Pad `i` sits at `origin + i * pitch` along `axis`, keeps the origin's other
/// coordinate, and is numbered `first_designator + i`. The sign of `pitch`
/// picks the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PadArraySegment {
    /// Position of the first pad (mm).
    pub origin: Point,
    /// Signed centre-to-centre spacing (mm).
    pub pitch: f64,
    /// Number of pads in the run.
    pub count: u32,
    /// Direction of the run.
    pub axis: Axis,
    /// Designator of the first pad.
    pub first_designator: u32,
}

impl PadArraySegment {
    /// Creates a run starting at `origin`.
    #[must_use]
    pub const fn new(origin: Point, pitch: f64, count: u32, axis: Axis, first_designator: u32) -> Self {
        Self {
            origin,
            pitch,
            count,
            axis,
            first_designator,
        }
    }

    /// Creates a run whose pads are centred on `centre`.
    ///
    /// The first pad is placed half the run length before the centre, against
    /// the direction of `pitch`.
    #[must_use]
    pub fn centred(centre: Point, pitch: f64, count: u32, axis: Axis, first_designator: u32) -> Self {
        let half_span = if count == 0 {
            0.0
        } else {
            pitch * f64::from(count - 1) / 2.0
        };
        let origin = match axis {
            Axis::Horizontal => Point::new(centre.x - half_span, centre.y),
            Axis::Vertical => Point::new(centre.x, centre.y - half_span),
        };
        Self::new(origin, pitch, count, axis, first_designator)
    }

    /// Returns the designators this run assigns, in array order.
    #[must_use]
    pub const fn designators(&self) -> Range<u32> {
        self.first_designator..self.first_designator.saturating_add(self.count)
    }

    /// Returns the centre of pad `index`.
    #[must_use]
    pub fn position(&self, index: u32) -> Point {
        let offset = f64::from(index) * self.pitch;
        match self.axis {
            Axis::Horizontal => Point::new(self.origin.x + offset, self.origin.y),
            Axis::Vertical => Point::new(self.origin.x, self.origin.y + offset),
        }
    }

    /// Lays out the run using `spec` for every pad.
    #[must_use]
    pub fn layout(&self, spec: &PadSpec) -> Vec<Pad> {
        (0..self.count)
            .map(|i| Pad {
                position: self.position(i),
                spec: *spec,
                designator: self.first_designator.saturating_add(i),
            })
            .collect()
    }
}
