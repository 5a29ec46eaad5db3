use crate::chunk::ChunkTag;
use crate::error::Error;
use core::convert::TryInto;

/// Size of the fixed fields at the start of every `fmt ` chunk
pub const FMT_FIELDS_LEN: usize = 16;

/// Audio format code stored in the `fmt ` chunk
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AudioFormat {
    /// PCM (Pulse Code Modulation) - integer samples
    Pcm,
    /// IEEE float - floating point samples
    IeeeFloat,
    /// Any other code; only usable with 8, 16 and 24 bit samples
    Other(u16),
}

impl AudioFormat {
    /// Map a raw format code
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => AudioFormat::Pcm,
            3 => AudioFormat::IeeeFloat,
            other => AudioFormat::Other(other),
        }
    }

    /// Raw format code
    pub fn to_u16(self) -> u16 {
        match self {
            AudioFormat::Pcm => 1,
            AudioFormat::IeeeFloat => 3,
            AudioFormat::Other(code) => code,
        }
    }
}

/// Struct representing the `fmt ` section of a WAV file
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Fmt {
    /// audio format, PCM or IEEE float
    pub audio_format: AudioFormat,
    /// number of audio channels in the sample data, channels are interleaved
    pub num_channels: u16,
    /// sample rate, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate: u32,
    /// bytes per second as declared by the file
    pub byte_rate: u32,
    /// bytes per frame as declared by the file
    pub block_align: u16,
    /// bit depth for each sample, typical values are `16`, `24`, or `32`
    pub bit_depth: u16,
}

fn u16_at(bytes: &[u8], at: usize) -> Result<u16, Error> {
    bytes[at..at + 2]
        .try_into()
        .map_err(|_| Error::CantParseChunk(ChunkTag::Fmt))
        .map(u16::from_le_bytes)
}

fn u32_at(bytes: &[u8], at: usize) -> Result<u32, Error> {
    bytes[at..at + 4]
        .try_into()
        .map_err(|_| Error::CantParseChunk(ChunkTag::Fmt))
        .map(u32::from_le_bytes)
}

impl Fmt {
    /// Parse the six fixed fields of a `fmt ` chunk body.
    ///
    /// Any extension bytes past the first 16 are ignored here; the chunk
    /// reader skips them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < FMT_FIELDS_LEN {
            return Err(Error::CantParseChunk(ChunkTag::Fmt));
        }

        let fmt = Fmt {
            audio_format: AudioFormat::from_u16(u16_at(bytes, 0)?),
            num_channels: u16_at(bytes, 2)?,
            sample_rate: u32_at(bytes, 4)?,
            byte_rate: u32_at(bytes, 8)?,
            block_align: u16_at(bytes, 12)?,
            bit_depth: u16_at(bytes, 14)?,
        };

        if fmt.num_channels == 0 {
            return Err(Error::NoChannels);
        }
        if fmt.sample_rate == 0 {
            return Err(Error::ZeroSampleRate);
        }

        Ok(fmt)
    }

    /// Bytes taken by one sample of one channel
    pub fn bytes_per_sample(&self) -> usize {
        (self.bit_depth / 8) as usize
    }

    /// Bytes taken by one interleaved frame, computed from channels and bit depth
    pub fn frame_len(&self) -> usize {
        self.num_channels as usize * self.bytes_per_sample()
    }

    /// Number of frames a data chunk of `data_size` bytes holds
    pub fn frame_count(&self, data_size: u32) -> usize {
        match self.frame_len() {
            0 => 0,
            frame_len => data_size as usize / frame_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEREO_16: [u8; 16] = [
        0x01, 0x00, // audio format
        0x02, 0x00, // num channels
        0x44, 0xac, 0x00, 0x00, // sample rate
        0x10, 0xb1, 0x02, 0x00, // byte rate
        0x04, 0x00, // block align
        0x10, 0x00, // bits per sample
    ];

    #[test]
    fn parse_fixed_fields() {
        let fmt = Fmt::from_bytes(&STEREO_16).unwrap();

        assert_eq!(fmt.audio_format, AudioFormat::Pcm);
        assert_eq!(fmt.num_channels, 2);
        assert_eq!(fmt.sample_rate, 44_100);
        assert_eq!(fmt.byte_rate, 176_400);
        assert_eq!(fmt.block_align, 4);
        assert_eq!(fmt.bit_depth, 16);
        assert_eq!(fmt.frame_len(), 4);
        assert_eq!(fmt.frame_count(4410), 1102);
    }

    #[test]
    fn unknown_format_codes_are_kept() {
        let mut bytes = STEREO_16;
        bytes[0] = 0xfe;
        bytes[1] = 0xff;

        let fmt = Fmt::from_bytes(&bytes).unwrap();
        assert_eq!(fmt.audio_format, AudioFormat::Other(0xfffe));
        assert_eq!(fmt.audio_format.to_u16(), 0xfffe);
    }

    #[test]
    fn truncated_fields() {
        assert_eq!(
            Fmt::from_bytes(&STEREO_16[..14]),
            Err(Error::CantParseChunk(ChunkTag::Fmt))
        );
    }

    #[test]
    fn rejects_zero_channels_and_rate() {
        let mut bytes = STEREO_16;
        bytes[2] = 0;
        assert_eq!(Fmt::from_bytes(&bytes), Err(Error::NoChannels));

        let mut bytes = STEREO_16;
        bytes[4] = 0;
        bytes[5] = 0;
        assert_eq!(Fmt::from_bytes(&bytes), Err(Error::ZeroSampleRate));
    }

    #[test]
    fn sub_byte_depths_hold_no_frames() {
        let mut fmt = Fmt::from_bytes(&STEREO_16).unwrap();
        fmt.bit_depth = 4;

        assert_eq!(fmt.frame_count(1024), 0);
    }
}
