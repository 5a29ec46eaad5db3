use crate::error::{Error, Result};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Characters drawn for cells inside and outside the waveform
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GlyphPair {
    /// cell covered by the waveform
    pub active: char,
    /// empty cell
    pub inactive: char,
}

impl Default for GlyphPair {
    fn default() -> Self {
        Self {
            active: '*',
            inactive: ' ',
        }
    }
}

impl GlyphPair {
    /// Take the first two characters of `chars`.
    ///
    /// A single character is paired with a space; an empty string gives the
    /// default `*` and space.
    pub fn parse(chars: &str) -> Self {
        let mut it = chars.chars();
        match (it.next(), it.next()) {
            (Some(active), Some(inactive)) => Self { active, inactive },
            (Some(active), None) => Self {
                active,
                inactive: ' ',
            },
            _ => Self::default(),
        }
    }
}

/// Round an even height up so the raster has a center row
pub fn odd_height(height: usize) -> usize {
    if height % 2 == 0 { height + 1 } else { height }
}

fn border_glyph(x: usize, y: usize, width: usize, height: usize) -> Option<char> {
    let (left, right) = (x == 0, x + 1 == width);
    let (top, bottom) = (y == 0, y + 1 == height);

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(TOP_LEFT),
        (true, _, _, true) => Some(TOP_RIGHT),
        (_, true, true, _) => Some(BOTTOM_LEFT),
        (_, true, _, true) => Some(BOTTOM_RIGHT),
        (true, _, _, _) | (_, true, _, _) => Some(HORIZONTAL),
        (_, _, true, _) | (_, _, _, true) => Some(VERTICAL),
        _ => None,
    }
}

/// Render peaks as a `width` x `height` character raster.
///
/// Column `x` is filled over the rows `[mid - peak - 1, mid + peak)` where
/// `mid = height / 2 + 1`, so a silent column still marks the center row.
/// An even `height` is rounded up first. With `border` set, the outer ring is
/// drawn with box-drawing characters on top of the waveform.
pub fn ascii(
    peaks: &[i16],
    width: usize,
    height: usize,
    glyphs: GlyphPair,
    border: bool,
) -> Result<String> {
    if width == 0 {
        return Err(Error::InvalidRenderParameters("width must be positive"));
    }
    if peaks.len() < width {
        return Err(Error::NotEnoughSamples {
            samples: peaks.len(),
            required: width,
        });
    }

    let height = odd_height(height);
    let mid = (height / 2 + 1) as i64;
    let mut out = String::with_capacity((width + 1) * height);

    for y in 0..height {
        let row = y as i64;
        for (x, &peak) in peaks.iter().take(width).enumerate() {
            let peak = i64::from(peak);
            let glyph = match border_glyph(x, y, width, height) {
                Some(edge) if border => edge,
                _ if row >= mid - peak - 1 && row < mid + peak => glyphs.active,
                _ => glyphs.inactive,
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    Ok(out)
}
