use tracing::warn;

/// Decoded samples, one normalized 16 bit sequence per channel
#[derive(Debug, PartialEq, Clone)]
pub struct AudioBuffer {
    channels: Vec<Vec<i16>>,
    trimmed: usize,
}

impl AudioBuffer {
    /// Build a buffer from per-channel samples.
    ///
    /// Channels longer than the shortest one are cut down to its length; the
    /// number of discarded samples is kept in [`AudioBuffer::trimmed`].
    pub fn from_channels(mut channels: Vec<Vec<i16>>) -> Self {
        let shortest = channels.iter().map(Vec::len).min().unwrap_or(0);
        let mut trimmed = 0;

        for channel in &mut channels {
            trimmed += channel.len() - shortest;
            channel.truncate(shortest);
        }

        if trimmed > 0 {
            warn!(trimmed, shortest, "channel lengths differ, trimming to the shortest");
        }

        Self { channels, trimmed }
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// `true` if no channel holds any sample
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples of channel `index`
    pub fn channel(&self, index: usize) -> Option<&[i16]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Samples dropped while equalizing channel lengths
    pub fn trimmed(&self) -> usize {
        self.trimmed
    }

    /// Downmix to a single channel.
    ///
    /// Every output sample is the mean of the channels at that index,
    /// truncated toward zero.
    pub fn mono_samples(&self) -> Vec<i16> {
        let num_channels = self.channels.len() as i32;
        if num_channels == 0 {
            return Vec::new();
        }

        (0..self.len())
            .map(|i| {
                let sum: i32 = self.channels.iter().map(|c| i32::from(c[i])).sum();
                (sum / num_channels) as i16
            })
            .collect()
    }
}
