//! ASCII previews of generated footprints.
//!
//! Text-only clients have no canvas, so the server can return a character
//! grid instead: `#` for pad copper, `-`/`|` for silkscreen, `.` for the
//! courtyard and `+` for the origin. Y grows downwards on screen as it does in
//! footprint space, so no flip is needed.

use std::fmt::Write;

use crate::geometry::{Point, Rect};
use crate::wizard::Footprint;

/// Widest canvas a preview may request, in characters.
pub const MAX_CANVAS_WIDTH: usize = 500;

/// Tallest canvas a preview may request, in characters.
pub const MAX_CANVAS_HEIGHT: usize = 200;

/// Preview size limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Characters per millimetre before clamping.
    pub scale: f64,
    /// Maximum canvas width in characters, at most [`MAX_CANVAS_WIDTH`].
    pub max_width: usize,
    /// Maximum canvas height in characters, at most [`MAX_CANVAS_HEIGHT`].
    pub max_height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            max_width: 80,
            max_height: 40,
        }
    }
}

/// Renders a footprint as ASCII art.
///
/// The canvas never exceeds [`MAX_CANVAS_WIDTH`] by [`MAX_CANVAS_HEIGHT`],
/// whatever the options ask for.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_ascii(footprint: &Footprint, options: &RenderOptions) -> String {
    let mut bounds = footprint.courtyard;
    for pad in &footprint.pads {
        let pad_box = pad.bounding_box();
        bounds.min_x = bounds.min_x.min(pad_box.min_x);
        bounds.min_y = bounds.min_y.min(pad_box.min_y);
        bounds.max_x = bounds.max_x.max(pad_box.max_x);
        bounds.max_y = bounds.max_y.max(pad_box.max_y);
    }

    let margin = 0.5;
    let bounds = bounds.inflate(margin);

    let width_mm = bounds.width();
    let height_mm = bounds.height();
    let canvas_width = ((width_mm * options.scale).ceil() as usize)
        .min(options.max_width.min(MAX_CANVAS_WIDTH))
        .max(10);
    let canvas_height = ((height_mm * options.scale).ceil() as usize)
        .min(options.max_height.min(MAX_CANVAS_HEIGHT))
        .max(5);

    let scale_x = canvas_width as f64 / width_mm;
    let scale_y = canvas_height as f64 / height_mm;

    let to_canvas = |p: Point| -> (usize, usize) {
        let cx = ((p.x - bounds.min_x) * scale_x).round().max(0.0) as usize;
        let cy = ((p.y - bounds.min_y) * scale_y).round().max(0.0) as usize;
        (cx.min(canvas_width - 1), cy.min(canvas_height - 1))
    };

    let mut canvas = vec![vec![' '; canvas_width]; canvas_height];

    draw_rect(&mut canvas, &footprint.courtyard, &to_canvas, '.');

    for segment in &footprint.silkscreen {
        let ch = if segment.side.is_horizontal() { '-' } else { '|' };
        draw_line(&mut canvas, to_canvas(segment.start), to_canvas(segment.end), ch);
    }

    for pad in &footprint.pads {
        let pad_box = pad.bounding_box();
        let (x1, y1) = to_canvas(Point::new(pad_box.min_x, pad_box.min_y));
        let (x2, y2) = to_canvas(Point::new(pad_box.max_x, pad_box.max_y));
        for row in &mut canvas[y1..=y2] {
            for cell in &mut row[x1..=x2] {
                *cell = '#';
            }
        }

        let (cx, cy) = to_canvas(pad.position);
        canvas[cy][cx] = char::from_digit(pad.designator % 10, 10).unwrap_or('#');
    }

    let (ox, oy) = to_canvas(Point::default());
    canvas[oy][ox] = '+';

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Footprint: {} (courtyard {:.2} x {:.2} mm)",
        footprint.name,
        footprint.courtyard.width(),
        footprint.courtyard.height()
    );
    let _ = writeln!(
        output,
        "Pads: {}, Silkscreen segments: {}",
        footprint.pads.len(),
        footprint.silkscreen.len()
    );
    output.push_str(&"-".repeat(canvas_width + 2));
    output.push('\n');

    for row in &canvas {
        output.push('|');
        output.extend(row.iter());
        output.push('|');
        output.push('\n');
    }

    output.push_str(&"-".repeat(canvas_width + 2));
    output.push('\n');
    output.push_str(
        "Legend: # = pad (digit = last digit of pad number), -/| = silkscreen, . = courtyard, + = origin\n",
    );

    output
}

/// Traces the outline of `rect`.
fn draw_rect<F>(canvas: &mut [Vec<char>], rect: &Rect, to_canvas: &F, ch: char)
where
    F: Fn(Point) -> (usize, usize),
{
    let corners = [
        Point::new(rect.min_x, rect.min_y),
        Point::new(rect.max_x, rect.min_y),
        Point::new(rect.max_x, rect.max_y),
        Point::new(rect.min_x, rect.max_y),
    ];
    for i in 0..corners.len() {
        let a = to_canvas(corners[i]);
        let b = to_canvas(corners[(i + 1) % corners.len()]);
        draw_line(canvas, a, b, ch);
    }
}

/// Draws a line on the canvas using Bresenham's algorithm.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn draw_line(canvas: &mut [Vec<char>], (x0, y0): (usize, usize), (x1, y1): (usize, usize), ch: char) {
    let dx = (x1 as isize - x0 as isize).abs();
    let dy = (y1 as isize - y0 as isize).abs();
    let sx: isize = if x0 < x1 { 1 } else { -1 };
    let sy: isize = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0 as isize;
    let mut y = y0 as isize;

    let height = canvas.len();
    let width = canvas.first().map_or(0, Vec::len);

    loop {
        if (x as usize) < width && (y as usize) < height {
            canvas[y as usize][x as usize] = ch;
        }

        if x == x1 as isize && y == y1 as isize {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
