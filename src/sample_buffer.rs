// src/sample_buffer.rs
//
// Decoded audio and time-range slicing.
//
// Channel data is stored planar, one Vec per channel, all the same length.
// Slicing works on sample indices derived from a TimeSelection:
// floor(start * rate) .. floor(end * rate), clamped to the channel.

use std::ops::Range;

use crate::error::{BufferError, BufferResult};
use crate::selection::TimeSelection;

/// Decoded audio asset: per-channel amplitudes in [-1.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    channels: Vec<Vec<f32>>,
    sample_rate: f64,
    frames: usize,
}

impl AudioClip {
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: f64) -> BufferResult<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(BufferError::InvalidSampleRate(sample_rate));
        }
        let Some(first) = channels.first() else {
            return Err(BufferError::NoChannels);
        };
        let frames = first.len();
        for (channel, data) in channels.iter().enumerate().skip(1) {
            if data.len() != frames {
                return Err(BufferError::RaggedChannels {
                    channel,
                    expected: frames,
                    actual: data.len(),
                });
            }
        }
        Ok(Self {
            channels,
            sample_rate,
            frames,
        })
    }

    /// Mono clip from a single channel.
    pub fn mono(samples: Vec<f32>, sample_rate: f64) -> BufferResult<Self> {
        Self::new(vec![samples], sample_rate)
    }

    /// Split planar data laid out as `[ch0 frames..., ch1 frames..., ...]`.
    pub fn from_planar(data: &[f32], channels: usize, sample_rate: f64) -> BufferResult<Self> {
        if channels == 0 {
            return Err(BufferError::NoChannels);
        }
        let frames = data.len() / channels;
        if frames * channels != data.len() {
            return Err(BufferError::SizeMismatch {
                expected: frames * channels,
                actual: data.len(),
            });
        }
        let planes: Vec<Vec<f32>> = if frames == 0 {
            vec![Vec::new(); channels]
        } else {
            data.chunks(frames).map(<[f32]>::to_vec).collect()
        };
        Self::new(planes, sample_rate)
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Length in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.frames as f64 / self.sample_rate
    }

    #[inline]
    pub fn channel(&self, ch: usize) -> Option<&[f32]> {
        self.channels.get(ch).map(Vec::as_slice)
    }

    /// Sample index range covered by `[start, end)` seconds.
    ///
    /// Empty when the interval is degenerate or starts past the end.
    pub fn sample_range(&self, start: f64, end: f64) -> Range<usize> {
        let first = (start * self.sample_rate).floor().max(0.0) as usize;
        let last = (end * self.sample_rate).floor().max(0.0) as usize;
        if first >= last {
            return 0..0;
        }
        first.min(self.frames)..last.min(self.frames)
    }

    /// Samples of channel `ch` inside the selection.
    ///
    /// Returns `None` for a degenerate selection or an empty slice.
    pub fn slice(&self, ch: usize, selection: &TimeSelection) -> Option<&[f32]> {
        let data = self.channel(ch)?;
        let range = self.sample_range(selection.start(), selection.end());
        if range.is_empty() {
            return None;
        }
        Some(&data[range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(frames: usize) -> Vec<f32> {
        (0..frames).map(|i| i as f32 / frames as f32).collect()
    }

    #[test]
    fn test_new_validates_input() {
        assert_eq!(
            AudioClip::new(Vec::new(), 100.0).unwrap_err(),
            BufferError::NoChannels
        );
        assert_eq!(
            AudioClip::mono(vec![0.0], 0.0).unwrap_err(),
            BufferError::InvalidSampleRate(0.0)
        );
        assert!(matches!(
            AudioClip::new(vec![vec![0.0; 4], vec![0.0; 3]], 100.0),
            Err(BufferError::RaggedChannels { channel: 1, .. })
        ));
    }

    #[test]
    fn test_duration() {
        let clip = AudioClip::mono(vec![0.0; 22050], 44100.0).unwrap();
        assert_eq!(clip.duration(), 0.5);
        assert_eq!(clip.frames(), 22050);
    }

    #[test]
    fn test_from_planar_splits_channels() {
        let clip = AudioClip::from_planar(&[1.0, 2.0, 3.0, -1.0, -2.0, -3.0], 2, 10.0).unwrap();
        assert_eq!(clip.num_channels(), 2);
        assert_eq!(clip.channel(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(clip.channel(1), Some(&[-1.0, -2.0, -3.0][..]));
        assert!(AudioClip::from_planar(&[1.0, 2.0, 3.0], 2, 10.0).is_err());
    }

    #[test]
    fn test_slice_uses_floored_indices() {
        let clip = AudioClip::mono(ramp(1000), 1000.0).unwrap();
        let mut sel = TimeSelection::new(clip.duration(), 0.05);
        sel.set_start(0.0105);
        let samples = clip.slice(0, &sel).unwrap();
        // floor(10.5)..floor(50)
        assert_eq!(samples.len(), 40);
        assert_eq!(samples[0], 10.0 / 1000.0);
    }

    #[test]
    fn test_degenerate_selection_yields_nothing() {
        let clip = AudioClip::mono(ramp(1000), 1000.0).unwrap();
        let mut sel = TimeSelection::new(clip.duration(), 0.05);
        sel.set_start(0.05);
        assert_eq!((sel.start(), sel.end()), (0.05, 0.05));
        assert!(clip.slice(0, &sel).is_none());
    }

    #[test]
    fn test_slice_clamps_to_channel() {
        let clip = AudioClip::mono(ramp(10), 10.0).unwrap();
        assert_eq!(clip.sample_range(0.5, 3.0), 5..10);
        assert!(clip.slice(1, &TimeSelection::new(1.0, 1.0)).is_none());
    }
}
