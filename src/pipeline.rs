//! The render pipeline: downmix, rescale, downsample, render.

use crate::downsample::{downsample_by_resolution, downsample_to_width};
use crate::error::{Error, Result};
use crate::info::format_info;
use crate::options::{OutputFormat, RenderParams};
use crate::render::{self, Canvas};
use crate::scale::scale_between;
use crate::wav::Wav;
use tracing::{debug, warn};

/// Largest peak value for a drawing area, failing if padding ate all of it
fn ceiling(available: i64) -> Result<i16> {
    if available < 0 {
        return Err(Error::InvalidRenderParameters(
            "padding leaves no room for the waveform",
        ));
    }
    Ok(available.min(i64::from(i16::MAX)) as i16)
}

/// Mono samples of `wav` rescaled to `[0, max]`
fn amplitudes(wav: &Wav, max: i16) -> Vec<i16> {
    scale_between(&wav.buffer.mono_samples(), 0, max)
}

/// Render the waveform of `wav` in `format`.
///
/// [`OutputFormat::Info`] yields just its ASCII preview; use [`describe`]
/// for the full summary.
pub fn render(wav: &Wav, format: OutputFormat, params: &RenderParams) -> Result<String> {
    let canvas = Canvas::new(params.width, params.height);
    let height = i64::from(params.height);
    let padding = i64::from(params.padding);

    debug!(?format, ?params, "rendering");

    match format {
        OutputFormat::Blob | OutputFormat::Line => {
            let scaled = amplitudes(wav, ceiling(height - padding)?);
            let peaks = downsample_by_resolution(&scaled, wav.fmt.sample_rate, params.resolution)?;

            if format == OutputFormat::Blob {
                render::blob_svg(&peaks, canvas)
            } else {
                render::line_svg(&peaks, canvas)
            }
        }
        OutputFormat::Radial => {
            let shortest = i64::from(params.width.min(params.height));
            let max = ceiling(shortest / 2 - padding - i64::from(params.radius))?;
            let scaled = amplitudes(wav, max);
            let peaks = downsample_by_resolution(&scaled, wav.fmt.sample_rate, params.resolution)?;

            render::radial_svg(&peaks, canvas, params.radius)
        }
        OutputFormat::Ascii | OutputFormat::Info => {
            let height = render::odd_height(params.height as usize);
            let width = params.width as usize;
            let scaled = amplitudes(wav, ceiling(height as i64 / 2 - padding)?);
            let peaks = downsample_to_width(&scaled, width)?;

            render::ascii(&peaks, width, height, params.glyphs, params.border)
        }
    }
}

/// File summary of `wav` followed by its ASCII preview.
///
/// Audio too short for the preview still gets the summary.
pub fn describe(path: &str, wav: &Wav, params: &RenderParams) -> Result<String> {
    let preview = match render(wav, OutputFormat::Info, params) {
        Ok(preview) => preview,
        Err(err @ Error::NotEnoughSamples { .. }) => {
            warn!(%err, "skipping waveform preview");
            String::new()
        }
        Err(err) => return Err(err),
    };

    Ok(format_info(path, wav, &preview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AudioBuffer;
    use crate::fmt::{AudioFormat, Fmt};
    use crate::options::RenderOptions;

    fn wav(sample_rate: u32, channels: Vec<Vec<i16>>) -> Wav {
        let num_channels = channels.len() as u16;
        let data_size = (channels[0].len() * channels.len() * 2) as u32;
        Wav {
            fmt: Fmt {
                audio_format: AudioFormat::Pcm,
                num_channels,
                sample_rate,
                byte_rate: sample_rate * u32::from(num_channels) * 2,
                block_align: num_channels * 2,
                bit_depth: 16,
            },
            riff_size: data_size + 36,
            data_size,
            buffer: AudioBuffer::from_channels(channels),
            skipped: vec![],
        }
    }

    fn ramp(len: usize) -> Vec<i16> {
        (0..len).map(|i| (i % 100) as i16 * 300).collect()
    }

    #[test]
    fn blob_for_one_second() {
        let wav = wav(100, vec![ramp(100)]);
        let params = RenderOptions::default().resolve(OutputFormat::Blob);

        let svg = render(&wav, OutputFormat::Blob, &params).unwrap();

        assert!(svg.starts_with("<svg width=\"800\" height=\"300\""));
        // 5 peaks and their mirror image, 2 segments between each neighbour
        assert_eq!(svg.matches('Q').count(), 2 * 9);
    }

    #[test]
    fn line_and_radial() {
        let wav = wav(100, vec![ramp(200), ramp(200)]);

        let params = RenderOptions::default().resolve(OutputFormat::Line);
        let svg = render(&wav, OutputFormat::Line, &params).unwrap();
        // 2 seconds at 10 peaks per second
        assert_eq!(svg.matches('Q').count(), 2 * 19);

        let params = RenderOptions::default().resolve(OutputFormat::Radial);
        let svg = render(&wav, OutputFormat::Radial, &params).unwrap();
        assert_eq!(svg.matches("<line").count(), 40);
        assert!(svg.contains("<circle cx=\"250\" cy=\"250\" r=\"50\""));
    }

    #[test]
    fn constant_loudness_draws_spokes_to_inner_circle() {
        let wav = wav(10, vec![vec![i16::MAX; 40]]);
        let params = RenderParams {
            resolution: 4,
            ..RenderOptions::default().resolve(OutputFormat::Radial)
        };

        let svg = render(&wav, OutputFormat::Radial, &params).unwrap();

        // constant loudness rescales to the floor: every spoke ends on the inner circle
        assert!(svg.contains("x2=\"250\" y2=\"200\""));
    }

    #[test]
    fn ascii_of_silence() {
        let wav = wav(8_000, vec![vec![0; 1000]]);
        let params = RenderOptions {
            width: Some(10),
            height: Some(8),
            ..Default::default()
        }
        .resolve(OutputFormat::Ascii);

        let out = render(&wav, OutputFormat::Ascii, &params).unwrap();
        let rows: Vec<&str> = out.lines().collect();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4], "**********");
        assert!(rows.iter().enumerate().all(|(y, r)| y == 4 || r.trim().is_empty()));
    }

    #[test]
    fn ascii_peak_reaches_the_padding() {
        let mut samples = vec![0; 100];
        samples[55] = -20_000;
        let wav = wav(8_000, vec![samples]);
        let params = RenderOptions {
            width: Some(10),
            height: Some(11),
            padding: Some(1),
            ..Default::default()
        }
        .resolve(OutputFormat::Ascii);

        let out = render(&wav, OutputFormat::Ascii, &params).unwrap();
        let column: String = out.lines().map(|row| row.chars().nth(5).unwrap()).collect();

        // height 11, ceiling 11 / 2 - 1 = 4: rows 1..=9 are covered
        assert_eq!(column, " ********* ");
    }

    #[test]
    fn ascii_ignores_resolution() {
        let wav = wav(100, vec![ramp(1000)]);
        let coarse = RenderOptions {
            resolution: Some(1),
            ..Default::default()
        }
        .resolve(OutputFormat::Ascii);
        let fine = RenderParams {
            resolution: 50,
            ..coarse
        };

        assert_eq!(
            render(&wav, OutputFormat::Ascii, &coarse).unwrap(),
            render(&wav, OutputFormat::Ascii, &fine).unwrap()
        );
    }

    #[test]
    fn not_enough_samples() {
        let wav = wav(44_100, vec![vec![1, 2, 3]]);

        let params = RenderOptions::default().resolve(OutputFormat::Ascii);
        assert!(matches!(
            render(&wav, OutputFormat::Ascii, &params),
            Err(Error::NotEnoughSamples { .. })
        ));

        let params = RenderOptions::default().resolve(OutputFormat::Blob);
        assert!(matches!(
            render(&wav, OutputFormat::Blob, &params),
            Err(Error::NotEnoughSamples { .. })
        ));
    }

    #[test]
    fn padding_larger_than_canvas() {
        let wav = wav(10, vec![ramp(100)]);
        let params = RenderOptions {
            padding: Some(400),
            ..Default::default()
        }
        .resolve(OutputFormat::Blob);

        assert!(matches!(
            render(&wav, OutputFormat::Blob, &params),
            Err(Error::InvalidRenderParameters(_))
        ));
    }

    #[test]
    fn describe_appends_bordered_preview() {
        let wav = wav(100, vec![ramp(1000)]);
        let params = RenderOptions::default().resolve(OutputFormat::Info);

        let out = describe("clips/ramp.wav", &wav, &params).unwrap();

        assert!(out.starts_with("File:        ramp.wav\n"));
        assert!(out.contains("Duration:    00:00:10.000 = 1000 samples\n"));
        assert!(out.contains("\n\n┌"));
        // 18 is rounded up to 19 rows
        assert_eq!(out.lines().filter(|l| l.starts_with('│')).count(), 17);
    }

    #[test]
    fn describe_short_audio_without_preview() {
        let wav = wav(8_000, vec![vec![5; 10]]);
        let params = RenderOptions::default().resolve(OutputFormat::Info);

        let out = describe("short.wav", &wav, &params).unwrap();

        assert!(out.ends_with("bytes\n"));
        assert!(!out.contains('┌'));
    }
}
