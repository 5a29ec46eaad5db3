//! Renderers turning downsampled peaks into SVG markup or ASCII art.
//!
//! Every renderer takes the peaks produced by [`crate::downsample`] and
//! returns a ready-to-print string.

mod ascii;
mod blob;
mod line;
mod radial;

pub use ascii::{GlyphPair, ascii, odd_height};
pub use blob::{blob_points, blob_svg};
pub use line::{line_points, line_svg};
pub use radial::{radial_points, radial_svg};

use core::fmt::Write;

/// Stroke color of the SVG renderers
pub const STROKE: &str = "red";

/// Pixel dimensions of an SVG render
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Canvas {
    /// width in pixels
    pub width: u32,
    /// height in pixels
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A point in SVG user space
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Point {
    /// horizontal coordinate, growing to the right
    pub x: f64,
    /// vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates rounded half away from zero
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

/// Integer rendering of an already rounded coordinate, so `-0.0` prints as `0`
fn int(value: f64) -> i64 {
    value.round() as i64
}

/// Build path data connecting `points` with quadratic Bezier segments.
///
/// Between every pair of points a midpoint is inserted; each half is drawn
/// with a control point halfway (horizontally) between the endpoint and the
/// midpoint, at the endpoint's height. The curve is flat at every input point.
pub(crate) fn smooth_path(points: &[Point]) -> String {
    let mut path = String::new();
    let Some(first) = points.first() else {
        return path;
    };

    let _ = write!(path, "M {} {}", int(first.x), int(first.y));

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let x_mid = ((a.x + b.x) / 2.0).round();
        let y_mid = ((a.y + b.y) / 2.0).round();
        let cp_x1 = ((x_mid + a.x) / 2.0).round();
        let cp_x2 = ((x_mid + b.x) / 2.0).round();

        let _ = write!(
            path,
            " Q {} {} {} {} Q {} {} {} {}",
            int(cp_x1),
            int(a.y),
            int(x_mid),
            int(y_mid),
            int(cp_x2),
            int(b.y),
            int(b.x),
            int(b.y)
        );
    }

    path
}

/// Wrap `body` in an `<svg>` element sized to `canvas`
pub(crate) fn svg_document(canvas: Canvas, body: &str) -> String {
    format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n{body}</svg>\n",
        w = canvas.width,
        h = canvas.height,
    )
}

/// Single `<path>` element with the shared stroke style
pub(crate) fn path_element(data: &str) -> String {
    format!("  <path d=\"{data}\" fill=\"none\" stroke=\"{STROKE}\" stroke-width=\"1\"/>\n")
}
