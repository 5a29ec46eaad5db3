use crate::error::Error;
use crate::fmt::{AudioFormat, Fmt};
use crate::scale::scale_linear;
use core::convert::TryInto;

/// Every sample is normalized into this range, whatever its source encoding
pub const NORMALIZED_MIN: f64 = i16::MIN as f64;
/// Upper end of the normalized range
pub const NORMALIZED_MAX: f64 = i16::MAX as f64;

/// Sample encodings supported by the decoder
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SampleKind {
    /// unsigned 8 bit integer, 0..255
    U8,
    /// signed 16 bit integer
    I16,
    /// signed 24 bit integer, packed in 3 bytes
    I24,
    /// signed 32 bit integer
    I32,
    /// 32 bit float, -1.0..1.0
    F32,
    /// 64 bit float, -1.0..1.0
    F64,
}

/// `(bits per sample, required audio format, kind)`; `None` accepts any format code
const DECODERS: [(u16, Option<AudioFormat>, SampleKind); 6] = [
    (8, None, SampleKind::U8),
    (16, None, SampleKind::I16),
    (24, None, SampleKind::I24),
    (32, Some(AudioFormat::Pcm), SampleKind::I32),
    (32, Some(AudioFormat::IeeeFloat), SampleKind::F32),
    (64, Some(AudioFormat::IeeeFloat), SampleKind::F64),
];

impl SampleKind {
    /// Look up the decoder for the bit depth and format declared by `fmt`
    pub fn for_fmt(fmt: &Fmt) -> Result<Self, Error> {
        DECODERS
            .iter()
            .find(|(bits, format, _)| {
                *bits == fmt.bit_depth && format.is_none_or(|f| f == fmt.audio_format)
            })
            .map(|(_, _, kind)| *kind)
            .ok_or(Error::InvalidSampleSize {
                bits: fmt.bit_depth,
                format: fmt.audio_format.to_u16(),
            })
    }

    /// Bytes occupied by one sample
    pub fn width(self) -> usize {
        match self {
            SampleKind::U8 => 1,
            SampleKind::I16 => 2,
            SampleKind::I24 => 3,
            SampleKind::I32 | SampleKind::F32 => 4,
            SampleKind::F64 => 8,
        }
    }

    /// Full scale range of the source encoding
    pub fn range(self) -> (f64, f64) {
        match self {
            SampleKind::U8 => (u8::MIN as f64, u8::MAX as f64),
            SampleKind::I16 => (i16::MIN as f64, i16::MAX as f64),
            SampleKind::I24 => (-8_388_608.0, 8_388_607.0),
            SampleKind::I32 => (i32::MIN as f64, i32::MAX as f64),
            SampleKind::F32 | SampleKind::F64 => (-1.0, 1.0),
        }
    }

    /// Read the raw value of one little-endian sample.
    ///
    /// `bytes` must hold exactly [`SampleKind::width`] bytes.
    pub fn read_raw(self, bytes: &[u8]) -> Option<f64> {
        let value = match self {
            SampleKind::U8 => *bytes.first()? as f64,
            SampleKind::I16 => i16::from_le_bytes(bytes.try_into().ok()?) as f64,
            SampleKind::I24 => read_i24(bytes.try_into().ok()?) as f64,
            SampleKind::I32 => i32::from_le_bytes(bytes.try_into().ok()?) as f64,
            SampleKind::F32 => f32::from_le_bytes(bytes.try_into().ok()?) as f64,
            SampleKind::F64 => f64::from_le_bytes(bytes.try_into().ok()?),
        };
        Some(value)
    }

    /// Decode one sample and map it into the normalized 16 bit range.
    ///
    /// Values outside the source range saturate at `i16::MIN`/`i16::MAX`.
    pub fn decode(self, bytes: &[u8]) -> Option<i16> {
        let (min, max) = self.range();
        let raw = self.read_raw(bytes)?;

        Some(scale_linear(raw, min, max, NORMALIZED_MIN, NORMALIZED_MAX) as i16)
    }
}

/// Sign-extend a packed little-endian 24 bit integer
pub fn read_i24(bytes: [u8; 3]) -> i32 {
    let sample = i32::from(bytes[0]) | (i32::from(bytes[1]) << 8) | (i32::from(bytes[2]) << 16);

    (sample << 8) >> 8
}
