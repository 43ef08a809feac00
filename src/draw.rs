//! Drawing collaborators.
//!
//! Generation never touches a host directly. It pushes pads into a [`PadSink`]
//! and graphics into a [`DrawingSurface`]; a host adapter implements both.
//! [`DrawList`] is the in-process implementation: it records every call as a
//! serialisable [`DrawCommand`], in call order.

use serde::Serialize;

use crate::geometry::{Pad, PadShape, Point};

/// Graphic layers the generator draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Front courtyard (placement keep-out).
    Courtyard,
    /// Front silkscreen.
    #[default]
    TopSilkscreen,
}

/// Receives graphic primitives.
pub trait DrawingSurface {
    /// Selects the layer for subsequent primitives.
    fn set_layer(&mut self, layer: Layer);

    /// Draws a closed rectangle centred on `centre`.
    fn draw_box(&mut self, centre: Point, width: f64, height: f64);

    /// Draws a line segment.
    fn line(&mut self, start: Point, end: Point);

    /// Places the value text.
    fn value(&mut self, position: Point, text_size: f64);

    /// Places the reference designator text.
    fn reference(&mut self, position: Point, text_size: f64);
}

/// Receives pads in ascending designator order.
pub trait PadSink {
    /// Adds one pad to the footprint.
    fn add_pad(&mut self, pad: &Pad);
}

/// Line widths the recording surface attaches to strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineWidths {
    /// Silkscreen stroke width (mm).
    pub silkscreen: f64,
    /// Courtyard stroke width (mm).
    pub courtyard: f64,
}

impl LineWidths {
    /// Returns the stroke width for `layer`.
    #[must_use]
    pub const fn for_layer(&self, layer: Layer) -> f64 {
        match layer {
            Layer::Courtyard => self.courtyard,
            Layer::TopSilkscreen => self.silkscreen,
        }
    }
}

impl Default for LineWidths {
    fn default() -> Self {
        Self {
            silkscreen: 0.15,
            courtyard: 0.05,
        }
    }
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// A pad handed to the pad sink.
    Pad {
        /// Pad number.
        designator: u32,
        /// Pad centre.
        position: Point,
        /// Copper extent along X after rotation (mm).
        size_x: f64,
        /// Copper extent along Y after rotation (mm).
        size_y: f64,
        /// Pad shape.
        shape: PadShape,
        /// Rotation in degrees.
        rotation: f64,
    },
    /// Layer switch.
    SetLayer {
        /// The new layer.
        layer: Layer,
    },
    /// Closed rectangle.
    Box {
        /// Layer drawn on.
        layer: Layer,
        /// Rectangle centre.
        centre: Point,
        /// Extent along X (mm).
        width: f64,
        /// Extent along Y (mm).
        height: f64,
        /// Stroke width (mm).
        line_width: f64,
    },
    /// Line segment.
    Line {
        /// Layer drawn on.
        layer: Layer,
        /// Start point.
        start: Point,
        /// End point.
        end: Point,
        /// Stroke width (mm).
        line_width: f64,
    },
    /// Value text.
    Value {
        /// Text anchor.
        position: Point,
        /// Text height (mm).
        text_size: f64,
    },
    /// Reference designator text.
    Reference {
        /// Text anchor.
        position: Point,
        /// Text height (mm).
        text_size: f64,
    },
}

/// A surface and pad sink that records every call.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    layer: Layer,
    widths: LineWidths,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list using the given stroke widths.
    #[must_use]
    pub fn new(widths: LineWidths) -> Self {
        Self {
            layer: Layer::default(),
            widths,
            commands: Vec::new(),
        }
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the list, returning the recorded commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Returns the number of recorded line segments.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl DrawingSurface for DrawList {
    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
        self.commands.push(DrawCommand::SetLayer { layer });
    }

    fn draw_box(&mut self, centre: Point, width: f64, height: f64) {
        self.commands.push(DrawCommand::Box {
            layer: self.layer,
            centre,
            width,
            height,
            line_width: self.widths.for_layer(self.layer),
        });
    }

    fn line(&mut self, start: Point, end: Point) {
        self.commands.push(DrawCommand::Line {
            layer: self.layer,
            start,
            end,
            line_width: self.widths.for_layer(self.layer),
        });
    }

    fn value(&mut self, position: Point, text_size: f64) {
        self.commands.push(DrawCommand::Value {
            position,
            text_size,
        });
    }

    fn reference(&mut self, position: Point, text_size: f64) {
        self.commands.push(DrawCommand::Reference {
            position,
            text_size,
        });
    }
}

impl PadSink for DrawList {
    fn add_pad(&mut self, pad: &Pad) {
        let (size_x, size_y) = pad.spec.extent();
        self.commands.push(DrawCommand::Pad {
            designator: pad.designator,
            position: pad.position,
            size_x,
            size_y,
            shape: pad.spec.shape,
            rotation: pad.spec.rotation.degrees(),
        });
    }
}
