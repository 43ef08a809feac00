//! Silkscreen outline with pad clearance gaps.
//!
//! Each side of the outline rectangle is handled as a 1-D [`IntervalSet`]
//! along that side's axis. Every pad whose clearance zone straddles the side's
//! line cuts its projection out of the set; whatever is left and is at least
//! `min_length` long becomes an [`OutlineSegment`].

use serde::Serialize;

use crate::geometry::{Interval, IntervalSet, Pad, Point, Rect};

/// One side of a rectangle, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The `y = min_y` edge.
    Top,
    /// The `x = max_x` edge.
    Right,
    /// The `y = max_y` edge.
    Bottom,
    /// The `x = min_x` edge.
    Left,
}

impl Side {
    /// All sides in the order segments are emitted.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns `true` for the top and bottom edges, which run along X.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns the fixed coordinate of this side's line.
    #[must_use]
    pub const fn line(self, rect: &Rect) -> f64 {
        match self {
            Self::Top => rect.min_y,
            Self::Right => rect.max_x,
            Self::Bottom => rect.max_y,
            Self::Left => rect.min_x,
        }
    }

    /// Returns the full extent of this side along its axis.
    #[must_use]
    pub fn span(self, rect: &Rect) -> Interval {
        if self.is_horizontal() {
            Interval::new(rect.min_x, rect.max_x)
        } else {
            Interval::new(rect.min_y, rect.max_y)
        }
    }

    /// Maps a position along this side back to a 2D point.
    #[must_use]
    pub const fn point(self, rect: &Rect, along: f64) -> Point {
        if self.is_horizontal() {
            Point::new(along, self.line(rect))
        } else {
            Point::new(self.line(rect), along)
        }
    }
}

/// A drawn piece of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlineSegment {
    /// The side this segment lies on.
    pub side: Side,
    /// Start point (lower coordinate along the side).
    pub start: Point,
    /// End point (higher coordinate along the side).
    pub end: Point,
}

impl OutlineSegment {
    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Builds clearance-aware outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBuilder {
    clearance: f64,
    min_length: f64,
}

impl OutlineBuilder {
    /// Creates a builder keeping `clearance` mm away from pads and dropping
    /// fragments shorter than `min_length` mm.
    #[must_use]
    pub const fn new(clearance: f64, min_length: f64) -> Self {
        Self {
            clearance,
            min_length,
        }
    }

    /// Returns the surviving intervals of one side.
    #[must_use]
    pub fn side_intervals(&self, rect: &Rect, side: Side, pads: &[Pad]) -> IntervalSet {
        let line = side.line(rect);
        let mut remaining = IntervalSet::single(side.span(rect));

        for pad in pads {
            let zone = pad.clearance_zone(self.clearance);
            let (across, along) = if side.is_horizontal() {
                (
                    Interval::new(zone.min_y, zone.max_y),
                    Interval::new(zone.min_x, zone.max_x),
                )
            } else {
                (
                    Interval::new(zone.min_x, zone.max_x),
                    Interval::new(zone.min_y, zone.max_y),
                )
            };

            if across.start < line && line < across.end {
                remaining.subtract(along);
            }
        }

        remaining.retain_min_length(self.min_length);
        remaining
    }

    /// Returns the outline of `rect` with pad clearance gaps, side by side.
    #[must_use]
    pub fn build(&self, rect: &Rect, pads: &[Pad]) -> Vec<OutlineSegment> {
        let mut segments = Vec::new();

        for side in Side::ALL {
            let intervals = self.side_intervals(rect, side, pads);
            segments.extend(intervals.iter().map(|interval| OutlineSegment {
                side,
                start: side.point(rect, interval.start),
                end: side.point(rect, interval.end),
            }));
        }

        segments
    }
}
