use crate::chunk::ChunkTag;
use thiserror::Error;

/// Error type for decoding and rendering failures
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Stream does not start with a RIFF header
    #[error("no RIFF chunk found")]
    NoRiffChunkFound,
    /// RIFF container is not of the WAVE form
    #[error("no WAVE tag found")]
    NoWaveTagFound,
    /// A data chunk appeared before any fmt chunk, or the file has none
    #[error("no fmt chunk found")]
    NoFmtChunkFound,
    /// No data chunk found
    #[error("no data chunk found")]
    NoDataChunkFound,
    /// Chunk header or fixed-size chunk fields are truncated
    #[error("can't parse {0} chunk")]
    CantParseChunk(ChunkTag),
    /// Bit depth and audio format code do not name a supported encoding
    #[error("invalid sample size: {bits} bits with audio format {format}")]
    InvalidSampleSize {
        /// bits per sample declared by the fmt chunk
        bits: u16,
        /// audio format code declared by the fmt chunk
        format: u16,
    },
    /// fmt chunk declares zero channels
    #[error("fmt chunk declares no channels")]
    NoChannels,
    /// fmt chunk declares a sample rate of zero
    #[error("fmt chunk declares a zero sample rate")]
    ZeroSampleRate,
    /// Data chunk is too small to hold a single frame
    #[error("could not get the number of samples")]
    ZeroFrameCount,
    /// Audio is too short for the requested resolution or width
    #[error("not enough samples: have {samples}, need at least {required}")]
    NotEnoughSamples {
        /// samples available
        samples: usize,
        /// samples needed for one bucket
        required: usize,
    },
    /// Render parameters leave no room for the waveform
    #[error("invalid render parameters: {0}")]
    InvalidRenderParameters(&'static str),
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Error returned by the reader based entry points
#[cfg(feature = "io")]
#[derive(Debug, Error, PartialEq)]
pub enum ReadError<E: core::fmt::Debug> {
    /// Error from the underlying reader
    #[error("reader error: {0:?}")]
    Reader(E),
    /// Error from the parser
    #[error(transparent)]
    Parser(#[from] Error),
}
