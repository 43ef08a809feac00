//! Three-sided pad arrangement around a rectangular body.
//!
//! The package carries one row of pads along the bottom edge, one column along
//! the right edge and one row along the top edge. Numbering runs
//! counter-clockwise: bottom row left to right, right column bottom to top,
//! top row right to left. Each run gets its designator range up front.

use serde::Serialize;

use crate::geometry::{Axis, Pad, PadArraySegment, PadRotation, PadSpec, Point};

/// Pad layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PadParams {
    /// Pads in the right column.
    pub vertical_count: u32,
    /// Pads in the top and bottom rows together. Must be even.
    pub horizontal_count: u32,
    /// Pad width (mm).
    pub pad_width: f64,
    /// Pad length before the hand-solder extension (mm).
    pub pad_length: f64,
    /// Centre-to-centre pad spacing (mm).
    pub pitch: f64,
    /// Extra pad length for hand soldering (mm).
    pub handsolder_margin: f64,
    /// Distance between the top and bottom row centres (mm).
    pub horizontal_row_spacing: f64,
    /// Distance from the footprint centre to the right column (mm).
    pub vertical_row_spacing: f64,
}

impl PadParams {
    /// Pads in each of the top and bottom rows.
    #[must_use]
    pub const fn row_count(&self) -> u32 {
        self.horizontal_count / 2
    }

    /// Total number of pads, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total_count(&self) -> u32 {
        self.horizontal_count.saturating_add(self.vertical_count)
    }

    /// Template for the top and bottom rows.
    #[must_use]
    pub fn row_pad(&self) -> PadSpec {
        PadSpec::smd(
            self.pad_length,
            self.pad_width,
            self.handsolder_margin,
            PadRotation::Deg0,
        )
    }

    /// Template for the right column.
    #[must_use]
    pub fn column_pad(&self) -> PadSpec {
        PadSpec::smd(
            self.pad_length,
            self.pad_width,
            self.handsolder_margin,
            PadRotation::Deg90,
        )
    }

    /// Returns the bottom, right and top runs, in numbering order.
    ///
    /// Designator arithmetic saturates. Counts that would overflow are
    /// rejected by the wizard's validator before composition.
    #[must_use]
    pub fn segments(&self) -> [PadArraySegment; 3] {
        debug_assert!(
            self.horizontal_count % 2 == 0,
            "horizontal pad count must be even"
        );

        let rows = self.row_count();
        let row_offset = self.horizontal_row_spacing / 2.0 + self.handsolder_margin / 2.0;
        let column_offset = self.vertical_row_spacing + self.handsolder_margin / 2.0;

        let bottom = PadArraySegment::centred(
            Point::new(0.0, row_offset),
            self.pitch,
            rows,
            Axis::Horizontal,
            1,
        );
        let right = PadArraySegment::centred(
            Point::new(column_offset, 0.0),
            -self.pitch,
            self.vertical_count,
            Axis::Vertical,
            rows.saturating_add(1),
        );
        let top = PadArraySegment::centred(
            Point::new(0.0, -row_offset),
            -self.pitch,
            rows,
            Axis::Horizontal,
            rows.saturating_add(self.vertical_count).saturating_add(1),
        );

        [bottom, right, top]
    }

    /// Lays out every pad.
    #[must_use]
    pub fn compose(&self) -> PerimeterLayout {
        let [bottom, right, top] = self.segments();
        let row_pad = self.row_pad();

        PerimeterLayout {
            bottom: bottom.layout(&row_pad),
            right: right.layout(&self.column_pad()),
            top: top.layout(&row_pad),
        }
    }
}

/// The pads of each edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerimeterLayout {
    /// Bottom row, numbered left to right.
    pub bottom: Vec<Pad>,
    /// Right column, numbered bottom to top.
    pub right: Vec<Pad>,
    /// Top row, numbered right to left.
    pub top: Vec<Pad>,
}

impl PerimeterLayout {
    /// Iterates all pads in designator order.
    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.bottom.iter().chain(&self.right).chain(&self.top)
    }

    /// Returns all pads in designator order.
    #[must_use]
    pub fn into_pads(self) -> Vec<Pad> {
        let mut pads = self.bottom;
        pads.extend(self.right);
        pads.extend(self.top);
        pads
    }

    /// Total number of pads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bottom.len() + self.right.len() + self.top.len()
    }

    /// Returns `true` if no pad was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
