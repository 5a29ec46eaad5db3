use super::{Canvas, Point, path_element, smooth_path, svg_document};
use crate::error::{Error, Result};

/// Zig-zag points: even buckets sit above the center line, odd ones below
pub fn line_points(peaks: &[i16], canvas: Canvas) -> Vec<Point> {
    let half = i64::from(canvas.height / 2);
    let step = f64::from(canvas.width) / peaks.len() as f64;

    peaks
        .iter()
        .enumerate()
        .map(|(i, &peak)| {
            let offset = i64::from(peak) / 2;
            let y = if i % 2 == 0 { half - offset } else { half + offset };
            Point::new(i as f64 * step, y as f64).rounded()
        })
        .collect()
}

/// Render one open curve swinging around the center line
pub fn line_svg(peaks: &[i16], canvas: Canvas) -> Result<String> {
    if peaks.is_empty() {
        return Err(Error::NotEnoughSamples {
            samples: 0,
            required: 1,
        });
    }

    let path = smooth_path(&line_points(peaks, canvas));
    Ok(svg_document(canvas, &path_element(&path)))
}
