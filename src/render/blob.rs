use super::{Canvas, Point, path_element, smooth_path, svg_document};
use crate::error::{Error, Result};

/// Outline of the blob: the peaks above the center line from left to right,
/// then mirrored below it from right to left.
pub fn blob_points(peaks: &[i16], canvas: Canvas) -> Vec<Point> {
    let half = i64::from(canvas.height / 2);
    let step = f64::from(canvas.width) / peaks.len() as f64;

    let upper: Vec<Point> = peaks
        .iter()
        .enumerate()
        .map(|(i, &peak)| Point::new(i as f64 * step, (half - i64::from(peak) / 2) as f64))
        .collect();

    let lower = upper
        .iter()
        .rev()
        .map(|p| Point::new(p.x, f64::from(canvas.height) - p.y));

    upper
        .iter()
        .copied()
        .chain(lower)
        .map(Point::rounded)
        .collect()
}

/// Render a closed, vertically symmetric shape whose height follows the peaks
pub fn blob_svg(peaks: &[i16], canvas: Canvas) -> Result<String> {
    if peaks.is_empty() {
        return Err(Error::NotEnoughSamples {
            samples: 0,
            required: 1,
        });
    }

    let path = smooth_path(&blob_points(peaks, canvas));
    Ok(svg_document(canvas, &path_element(&path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_mirrored() {
        let points = blob_points(&[0, 100, 50], Canvas::new(300, 200));

        assert_eq!(
            points,
            vec![
                Point::new(0.0, 100.0),
                Point::new(100.0, 50.0),
                Point::new(200.0, 75.0),
                Point::new(200.0, 125.0),
                Point::new(100.0, 150.0),
                Point::new(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn odd_peaks_are_halved_toward_zero() {
        let points = blob_points(&[7], Canvas::new(10, 21));

        // half height 10, 7 / 2 = 3
        assert_eq!(points, vec![Point::new(0.0, 7.0), Point::new(0.0, 14.0)]);
    }

    #[test]
    fn x_coordinates_are_rounded() {
        let points = blob_points(&[0, 0, 0], Canvas::new(100, 10));

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 33.0, 67.0, 67.0, 33.0, 0.0]);
    }

    #[test]
    fn svg_starts_and_ends_on_center_line() {
        let svg = blob_svg(&[0, 100, 50, 0], Canvas::new(400, 200)).unwrap();

        assert!(svg.starts_with("<svg width=\"400\" height=\"200\""));
        assert!(svg.contains("<path d=\"M 0 100 Q"));
        assert!(svg.contains(" 0 100\" fill=\"none\" stroke=\"red\""));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn no_peaks() {
        assert!(matches!(
            blob_svg(&[], Canvas::new(10, 10)),
            Err(Error::NotEnoughSamples { .. })
        ));
    }
}
