use super::{Canvas, Point, STROKE, svg_document};
use crate::error::{Error, Result};
use core::fmt::Write;

/// Angle of the first spoke, pointing straight up in SVG coordinates
const START_ANGLE: f64 = 270.0;

/// Spoke tips: one per peak, `inner_radius + peak` away from the center,
/// spread evenly clockwise starting at the top.
pub fn radial_points(peaks: &[i16], canvas: Canvas, inner_radius: u32) -> Vec<Point> {
    let cx = f64::from(canvas.width / 2);
    let cy = f64::from(canvas.height / 2);
    let increment = 360.0 / peaks.len() as f64;

    peaks
        .iter()
        .enumerate()
        .map(|(i, &peak)| {
            let length = f64::from(inner_radius) + f64::from(peak);
            let angle = (START_ANGLE + i as f64 * increment).to_radians();
            Point::new(length * angle.cos() + cx, length * angle.sin() + cy).rounded()
        })
        .collect()
}

/// Render spokes from the center to every tip, covered by a filled inner circle
pub fn radial_svg(peaks: &[i16], canvas: Canvas, inner_radius: u32) -> Result<String> {
    if peaks.is_empty() {
        return Err(Error::NotEnoughSamples {
            samples: 0,
            required: 1,
        });
    }

    let (cx, cy) = (canvas.width / 2, canvas.height / 2);
    let mut body = String::new();

    for tip in radial_points(peaks, canvas, inner_radius) {
        let _ = writeln!(
            body,
            "  <line x1=\"{cx}\" y1=\"{cy}\" x2=\"{}\" y2=\"{}\" stroke=\"{STROKE}\" stroke-width=\"1\"/>",
            tip.x as i64, tip.y as i64
        );
    }
    let _ = writeln!(
        body,
        "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{inner_radius}\" fill=\"white\"/>"
    );

    Ok(svg_document(canvas, &body))
}
