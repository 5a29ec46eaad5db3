use crate::buffer::AudioBuffer;
use crate::chunk::{ChunkReader, ChunkTag};
use crate::error::Error;
use crate::fmt::{FMT_FIELDS_LEN, Fmt};
use crate::sample::SampleKind;
use tracing::{debug, warn};

#[cfg(feature = "io")]
use crate::error::ReadError;

/// Struct representing a decoded WAV file
#[derive(Debug, PartialEq, Clone)]
pub struct Wav {
    /// Contains data from the fmt chunk / header part of the file
    pub fmt: Fmt,
    /// Size declared by the RIFF header, i.e. the file size minus 8
    pub riff_size: u32,
    /// Size declared by the data chunk header
    pub data_size: u32,
    /// Normalized samples, one sequence per channel
    pub buffer: AudioBuffer,
    /// Tags of the chunks that were skipped, in file order
    pub skipped: Vec<ChunkTag>,
}

/// Decode a complete WAV file held in memory.
///
/// Shorthand for [`Wav::from_bytes`].
pub fn decode(bytes: &[u8]) -> Result<Wav, Error> {
    Wav::from_bytes(bytes)
}

impl Wav {
    /// Create new [`Wav`] instance from a slice of bytes
    ///
    /// ```
    /// use wavshape::Wav;
    ///
    /// let bytes: [u8; 48] = [
    ///     0x52, 0x49, 0x46, 0x46, // RIFF
    ///     0x28, 0x00, 0x00, 0x00, // chunk size
    ///     0x57, 0x41, 0x56, 0x45, // WAVE
    ///     0x66, 0x6d, 0x74, 0x20, // fmt_
    ///     0x10, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, // audio format
    ///     0x01, 0x00, // num channels
    ///     0x40, 0x1f, 0x00, 0x00, // sample rate
    ///     0x80, 0x3e, 0x00, 0x00, // byte rate
    ///     0x02, 0x00, // block align
    ///     0x10, 0x00, // bits per sample
    ///     0x64, 0x61, 0x74, 0x61, // data
    ///     0x04, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, 0xff, 0xff, // samples
    /// ];
    ///
    /// let wav = Wav::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(wav.fmt.num_channels, 1);
    /// assert_eq!(wav.fmt.sample_rate, 8_000);
    /// assert_eq!(wav.buffer.mono_samples(), vec![1, -1]);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ChunkReader::new(bytes);

        let riff = match reader.next_header() {
            Ok(Some(header)) if header.tag == ChunkTag::Riff => header,
            _ => return Err(Error::NoRiffChunkFound),
        };

        match reader.read_tag(ChunkTag::Riff) {
            Ok(ChunkTag::Wave) => {}
            _ => return Err(Error::NoWaveTagFound),
        }

        let mut fmt: Option<Fmt> = None;
        let mut data: Option<(u32, AudioBuffer)> = None;
        let mut skipped = vec![];

        while let Some(header) = reader.next_header()? {
            let size = header.size as usize;

            match header.tag {
                ChunkTag::Fmt => {
                    let fields = reader.take_exact(FMT_FIELDS_LEN, ChunkTag::Fmt)?;
                    if size < FMT_FIELDS_LEN {
                        return Err(Error::CantParseChunk(ChunkTag::Fmt));
                    }
                    let parsed = Fmt::from_bytes(fields)?;
                    debug!(?parsed, "parsed fmt chunk");
                    fmt = Some(parsed);
                    reader.skip(size - FMT_FIELDS_LEN);
                }
                ChunkTag::Data if data.is_none() => {
                    let fmt = fmt.as_ref().ok_or(Error::NoFmtChunkFound)?;
                    let body = reader.take(size);
                    data = Some((header.size, read_samples(fmt, header.size, body)?));
                }
                tag => {
                    debug!(%tag, size, "skipping chunk");
                    skipped.push(tag);
                    reader.skip(size);
                }
            }

            reader.skip_padding(header.size);
        }

        let fmt = fmt.ok_or(Error::NoFmtChunkFound)?;
        let (data_size, buffer) = data.ok_or(Error::NoDataChunkFound)?;

        Ok(Wav {
            fmt,
            riff_size: riff.size,
            data_size,
            buffer,
            skipped,
        })
    }

    /// Create a [`Wav`] instance from a reader.
    ///
    /// The whole stream is buffered before decoding.
    #[cfg(feature = "io")]
    pub fn from_reader<R: embedded_io::Read>(reader: &mut R) -> Result<Self, ReadError<R::Error>> {
        let mut bytes = vec![];
        loop {
            let mut tmp = [0; 512];
            match reader.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => bytes.extend(&tmp[..n]),
                Err(e) => return Err(ReadError::Reader(e)),
            }
        }

        Ok(Self::from_bytes(&bytes)?)
    }

    /// Total file size as declared by the RIFF header
    pub fn file_size(&self) -> u64 {
        u64::from(self.riff_size) + 8
    }

    /// Frames declared by the data chunk header
    pub fn num_samples(&self) -> usize {
        self.fmt.frame_count(self.data_size)
    }

    /// Duration in seconds, derived from the declared data size
    pub fn duration(&self) -> f64 {
        self.num_samples() as f64 / f64::from(self.fmt.sample_rate)
    }
}

/// Decode the interleaved frames of a data chunk into per-channel samples.
///
/// `body` may be shorter than `declared_size` when the file is truncated;
/// whatever complete samples are present get decoded.
fn read_samples(fmt: &Fmt, declared_size: u32, body: &[u8]) -> Result<AudioBuffer, Error> {
    let kind = SampleKind::for_fmt(fmt)?;

    let frames = fmt.frame_count(declared_size);
    if frames == 0 {
        return Err(Error::ZeroFrameCount);
    }

    let num_channels = fmt.num_channels as usize;
    if body.len() < frames * fmt.frame_len() {
        warn!(
            declared = declared_size,
            available = body.len(),
            "data chunk ends early, decoding what is present"
        );
    }

    let capacity = frames.min(body.len() / fmt.frame_len());
    let mut channels = vec![Vec::with_capacity(capacity); num_channels];
    body.chunks_exact(kind.width())
        .take(frames * num_channels)
        .filter_map(|raw| kind.decode(raw))
        .enumerate()
        .for_each(|(i, sample)| channels[i % num_channels].push(sample));

    Ok(AudioBuffer::from_channels(channels))
}

/// Reader based entry points for async contexts
#[cfg(feature = "io")]
pub mod asynch {
    use super::Wav;
    use crate::error::ReadError;

    /// Create a [`Wav`] instance from an async reader.
    ///
    /// The whole stream is buffered before decoding.
    pub async fn from_reader<R: embedded_io_async::Read>(
        mut reader: R,
    ) -> Result<Wav, ReadError<R::Error>> {
        let mut bytes = vec![];
        loop {
            let mut tmp = [0; 512];
            match reader.read(&mut tmp).await {
                Ok(0) => break,
                Ok(n) => bytes.extend(&tmp[..n]),
                Err(e) => return Err(ReadError::Reader(e)),
            }
        }

        Ok(Wav::from_bytes(&bytes)?)
    }

    /// Read and decode a file with `tokio::fs`
    #[cfg(feature = "fs")]
    pub async fn from_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Wav, ReadError<std::io::Error>> {
        let bytes = tokio::fs::read(path).await.map_err(ReadError::Reader)?;

        Ok(Wav::from_bytes(&bytes)?)
    }
}
