//! The result of one generation run.

use serde::Serialize;

use crate::draw::{DrawingSurface, Layer, PadSink};
use crate::geometry::{OutlineSegment, Pad, Point, Rect};

/// Default reference/value text height (mm).
pub const DEFAULT_TEXT_SIZE: f64 = 1.0;

/// A generated footprint.
///
/// Holds everything the host needs: the pads in designator order, the
/// courtyard, and the notched silkscreen outline in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footprint {
    /// Footprint name.
    pub name: String,
    /// Default value text.
    pub value: String,
    /// Pads in ascending designator order.
    pub pads: Vec<Pad>,
    /// Nominal body rectangle the silkscreen follows.
    pub body: Rect,
    /// Courtyard rectangle, drawn whole.
    pub courtyard: Rect,
    /// Silkscreen segments that survived clearance subtraction.
    pub silkscreen: Vec<OutlineSegment>,
}

impl Footprint {
    /// Anchor of the value text, above the courtyard.
    #[must_use]
    pub fn value_position(&self, text_size: f64) -> Point {
        Point::new(0.0, -self.courtyard.height() / 2.0 - text_size)
    }

    /// Anchor of the reference text, below the courtyard.
    #[must_use]
    pub fn reference_position(&self, text_size: f64) -> Point {
        Point::new(0.0, self.courtyard.height() / 2.0 + text_size)
    }

    /// Replays the footprint into a host.
    ///
    /// Pads go to `sink` first, in designator order. Then the courtyard box,
    /// the silkscreen lines, and finally the value and reference texts go to
    /// `surface`.
    pub fn emit<P, S>(&self, text_size: f64, sink: &mut P, surface: &mut S)
    where
        P: PadSink + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        for pad in &self.pads {
            sink.add_pad(pad);
        }

        surface.set_layer(Layer::Courtyard);
        surface.draw_box(
            self.courtyard.centre(),
            self.courtyard.width(),
            self.courtyard.height(),
        );

        surface.set_layer(Layer::TopSilkscreen);
        for segment in &self.silkscreen {
            surface.line(segment.start, segment.end);
        }

        surface.value(self.value_position(text_size), text_size);
        surface.reference(self.reference_position(text_size), text_size);
    }
}
