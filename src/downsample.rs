use crate::error::{Error, Result};
use tracing::debug;

/// Reduce `amplitudes` to one peak per bucket.
///
/// Buckets hold `amplitudes.len() / bucket_count` samples each; the samples
/// left over after the last full bucket are dropped, so the result holds
/// `len / samples_per_bucket` peaks. That can be slightly more than
/// `bucket_count` when the length is not a multiple of it.
pub fn downsample(amplitudes: &[i16], bucket_count: usize) -> Result<Vec<i16>> {
    if bucket_count == 0 {
        return Err(Error::InvalidRenderParameters("bucket count must be positive"));
    }

    let samples_per_bucket = amplitudes.len() / bucket_count;
    if samples_per_bucket == 0 {
        return Err(Error::NotEnoughSamples {
            samples: amplitudes.len(),
            required: bucket_count,
        });
    }

    debug!(
        samples = amplitudes.len(),
        bucket_count, samples_per_bucket, "downsampling"
    );

    Ok(amplitudes
        .chunks_exact(samples_per_bucket)
        .map(|bucket| bucket.iter().copied().max().unwrap_or_default())
        .collect())
}

/// Downsample to `resolution` peaks per second of audio.
///
/// `resolution` is clamped to the number of samples.
pub fn downsample_by_resolution(
    amplitudes: &[i16],
    sample_rate: u32,
    resolution: u32,
) -> Result<Vec<i16>> {
    if resolution == 0 {
        return Err(Error::InvalidRenderParameters("resolution must be positive"));
    }
    if amplitudes.is_empty() {
        return Err(Error::NotEnoughSamples {
            samples: 0,
            required: 1,
        });
    }

    let resolution = (resolution as usize).min(amplitudes.len());
    let bucket_len = sample_rate as usize / resolution;
    if bucket_len == 0 {
        return Err(Error::InvalidRenderParameters(
            "resolution exceeds the sample rate",
        ));
    }

    let bucket_count = amplitudes.len() / bucket_len;
    if bucket_count == 0 {
        return Err(Error::NotEnoughSamples {
            samples: amplitudes.len(),
            required: bucket_len,
        });
    }

    downsample(amplitudes, bucket_count)
}

/// Downsample to exactly `width` peaks, one per output column
pub fn downsample_to_width(amplitudes: &[i16], width: usize) -> Result<Vec<i16>> {
    let mut peaks = downsample(amplitudes, width)?;
    peaks.truncate(width);
    Ok(peaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_per_bucket() {
        let amplitudes = [1, 5, 2, 0, 7, 3, 4, 4, 1];

        assert_eq!(downsample(&amplitudes, 3), Ok(vec![5, 7, 4]));
    }

    #[test]
    fn remainder_is_dropped() {
        let amplitudes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        // 10 / 4 = 2 samples per bucket, 10 / 2 = 5 buckets
        assert_eq!(downsample(&amplitudes, 4), Ok(vec![2, 4, 6, 8, 10]));
        // 10 / 3 = 3 samples per bucket, sample 10 is left over
        assert_eq!(downsample(&amplitudes, 3), Ok(vec![3, 6, 9]));
    }

    #[test]
    fn rebucketing_is_idempotent() {
        let amplitudes: Vec<i16> = (0..1000).map(|i| ((i * 37) % 101) as i16).collect();

        for count in [1, 7, 64, 333, 999] {
            let once = downsample(&amplitudes, count).unwrap();
            let twice = downsample(&once, count).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn too_few_samples() {
        assert_eq!(
            downsample(&[1, 2, 3], 4),
            Err(Error::NotEnoughSamples {
                samples: 3,
                required: 4
            })
        );
        assert!(matches!(
            downsample(&[1, 2, 3], 0),
            Err(Error::InvalidRenderParameters(_))
        ));
    }

    #[test]
    fn resolution_buckets() {
        // 2 seconds at 10 Hz, 5 peaks per second -> buckets of 2 samples
        let amplitudes: Vec<i16> = (0..20).collect();

        let peaks = downsample_by_resolution(&amplitudes, 10, 5).unwrap();
        assert_eq!(peaks, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
    }

    #[test]
    fn resolution_is_clamped_to_sample_count() {
        let amplitudes = [3, 1, 2];

        // resolution 100 is clamped to 3, sample rate 3 gives one sample per bucket
        assert_eq!(downsample_by_resolution(&amplitudes, 3, 100), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn audio_shorter_than_one_bucket() {
        let amplitudes = [1; 100];

        assert_eq!(
            downsample_by_resolution(&amplitudes, 44_100, 5),
            Err(Error::NotEnoughSamples {
                samples: 100,
                required: 8820
            })
        );
        assert_eq!(
            downsample_by_resolution(&[], 44_100, 5),
            Err(Error::NotEnoughSamples {
                samples: 0,
                required: 1
            })
        );
    }

    #[test]
    fn invalid_resolutions() {
        assert!(matches!(
            downsample_by_resolution(&[1, 2], 8_000, 0),
            Err(Error::InvalidRenderParameters(_))
        ));
        assert!(matches!(
            downsample_by_resolution(&[1; 20], 10, 20),
            Err(Error::InvalidRenderParameters(_))
        ));
    }

    #[test]
    fn width_buckets() {
        let amplitudes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        assert_eq!(downsample_to_width(&amplitudes, 4), Ok(vec![2, 4, 6, 8]));
        assert_eq!(downsample_to_width(&amplitudes, 10), Ok(amplitudes.to_vec()));
        assert!(matches!(
            downsample_to_width(&amplitudes, 11),
            Err(Error::NotEnoughSamples { .. })
        ));
    }
}
