use crate::wav::Wav;
use std::fmt::Write;
use std::path::Path;

/// `HH:MM:SS.mmm = N samples`, from the size declared by the data chunk
pub fn format_duration(wav: &Wav) -> String {
    let duration = wav.duration();
    let whole = duration as u64;
    let millis = ((duration - whole as f64) * 1000.0) as u64;

    format!(
        "{:02}:{:02}:{:02}.{:03} = {} samples",
        whole / 3600,
        whole % 3600 / 60,
        whole % 60,
        millis,
        wav.num_samples()
    )
}

/// Summarize the file's format, followed by `waveform` after a blank line
/// when it is not empty.
///
/// Only the base name of `path` is printed.
pub fn format_info(path: &str, wav: &Wav, waveform: &str) -> String {
    let name = Path::new(path)
        .file_name()
        .map_or_else(|| path.into(), |n| n.to_string_lossy());

    let mut out = String::new();
    let _ = writeln!(out, "File:        {name}");
    let _ = writeln!(out, "Channels:    {}", wav.fmt.num_channels);
    let _ = writeln!(out, "Sample rate: {} Hz", wav.fmt.sample_rate);
    let _ = writeln!(out, "Bit depth:   {} bits", wav.fmt.bit_depth);
    let _ = writeln!(out, "Byte rate:   {} B/s", wav.fmt.byte_rate);
    let _ = writeln!(out, "Duration:    {}", format_duration(wav));
    let _ = writeln!(out, "File size:   {} bytes", wav.file_size());

    if !waveform.is_empty() {
        out.push('\n');
        out.push_str(waveform);
    }

    out
}
