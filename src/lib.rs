//! Decode WAV files and render their waveform as SVG or ASCII art.
//!
//! Decoding a WAV file:
//! ```
//! use wavshape::{decode, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let bytes: [u8; 52] = [
//!         0x52, 0x49, 0x46, 0x46, // RIFF
//!         0x2c, 0x00, 0x00, 0x00, // chunk size
//!         0x57, 0x41, 0x56, 0x45, // WAVE
//!         0x66, 0x6d, 0x74, 0x20, // fmt_
//!         0x10, 0x00, 0x00, 0x00, // chunk size
//!         0x01, 0x00, // audio format
//!         0x02, 0x00, // num channels
//!         0x80, 0xbb, 0x00, 0x00, // sample rate
//!         0x00, 0xee, 0x02, 0x00, // byte rate
//!         0x04, 0x00, // block align
//!         0x10, 0x00, // bits per sample
//!         0x64, 0x61, 0x74, 0x61, // data
//!         0x08, 0x00, 0x00, 0x00, // chunk size
//!         0x01, 0x00, 0x03, 0x00, // samples
//!         0x05, 0x00, 0xf9, 0xff, // samples
//!     ];
//!
//!     let wav = decode(&bytes)?;
//!
//!     assert_eq!(wav.fmt.num_channels, 2);
//!     assert_eq!(wav.fmt.bit_depth, 16);
//!     assert_eq!(wav.fmt.sample_rate, 48_000);
//!     assert_eq!(wav.buffer.mono_samples(), vec![2, -1]);
//!     Ok(())
//! }
//! ```
//!
//! Rendering goes through the pipeline, which downmixes to mono, rescales
//! the magnitudes to the canvas, reduces them to one peak per bucket and
//! hands the peaks to a renderer:
//! ```
//! use wavshape::{AudioBuffer, AudioFormat, Fmt, OutputFormat, RenderOptions, Wav};
//! use wavshape::pipeline::render;
//!
//! let samples: Vec<i16> = (0..8_000).map(|i| ((i % 80) * 400) as i16).collect();
//! let wav = Wav {
//!     fmt: Fmt {
//!         audio_format: AudioFormat::Pcm,
//!         num_channels: 1,
//!         sample_rate: 8_000,
//!         byte_rate: 16_000,
//!         block_align: 2,
//!         bit_depth: 16,
//!     },
//!     riff_size: 16_036,
//!     data_size: 16_000,
//!     buffer: AudioBuffer::from_channels(vec![samples]),
//!     skipped: vec![],
//! };
//!
//! let params = RenderOptions::default().resolve(OutputFormat::Blob);
//! let svg = render(&wav, OutputFormat::Blob, &params).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

#![warn(missing_docs)]

mod buffer;
mod chunk;
mod downsample;
mod error;
mod fmt;
mod info;
mod options;
pub mod pipeline;
pub mod render;
mod sample;
mod scale;
mod wav;

pub use buffer::AudioBuffer;
pub use chunk::{ChunkHeader, ChunkReader, ChunkTag};
pub use downsample::{downsample, downsample_by_resolution, downsample_to_width};
pub use error::{Error, Result};
pub use fmt::{AudioFormat, Fmt};
pub use info::{format_duration, format_info};
pub use options::{OutputFormat, RenderOptions, RenderParams};
pub use sample::{SampleKind, read_i24};
pub use scale::{scale_between, scale_linear};
pub use wav::{Wav, decode};

#[cfg(feature = "io")]
pub use error::ReadError;
#[cfg(feature = "io")]
pub use wav::asynch;
