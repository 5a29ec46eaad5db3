//! wavshape CLI - render the waveform of a WAV file
//!
//! ```bash
//! wavshape song.wav
//! wavshape --format blob --width 1200 song.wav > blob.svg
//! wavshape --format ascii --chars "#." --border song.wav
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;
use wavshape::{OutputFormat, RenderOptions, decode, pipeline};

#[derive(Parser)]
#[command(
    name = "wavshape",
    version,
    about = "Render the waveform of a WAV file as SVG or ASCII art"
)]
struct Cli {
    /// Input .wav file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Info)]
    format: OutputFormat,

    /// Data points per second of audio (SVG formats only)
    #[arg(short, long)]
    resolution: Option<u32>,

    /// Output width, pixels or characters
    #[arg(long)]
    width: Option<u32>,

    /// Output height, pixels or characters
    #[arg(long)]
    height: Option<u32>,

    /// Space kept between the loudest peak and the edge
    #[arg(long)]
    padding: Option<u32>,

    /// Inner circle radius of the radial format
    #[arg(long)]
    circle_radius: Option<u32>,

    /// Characters for the ascii format: waveform, then background
    #[arg(long)]
    chars: Option<String>,

    /// Draw a border around the ascii format
    #[arg(long)]
    border: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            padding: self.padding,
            radius: self.circle_radius,
            chars: self.chars.clone(),
            border: self.border,
            resolution: self.resolution,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let is_wav = cli
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if !is_wav {
        bail!("no .wav file provided: {}", cli.input.display());
    }

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let wav = decode(&bytes).with_context(|| format!("failed to decode {}", cli.input.display()))?;

    debug!(
        channels = wav.fmt.num_channels,
        sample_rate = wav.fmt.sample_rate,
        bit_depth = wav.fmt.bit_depth,
        samples = wav.buffer.len(),
        skipped = ?wav.skipped,
        "decoded"
    );

    let params = cli.render_options().resolve(cli.format);
    let output = match cli.format {
        OutputFormat::Info => pipeline::describe(&cli.input.to_string_lossy(), &wav, &params)?,
        format => pipeline::render(&wav, format, &params)
            .with_context(|| format!("failed to render {}", cli.input.display()))?,
    };

    print!("{output}");
    Ok(())
}
