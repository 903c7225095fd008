// src/format/samples.rs
//
// Amplitude samples as a flat pseudo-array, eight values per line.

use std::fmt;

/// Values per output line.
pub const SAMPLES_PER_LINE: usize = 8;

/// Display adapter producing the sample text for a time range.
///
/// Only constructed for a non-empty range; see [`SampleTensor::new`].
pub struct SampleTensor<'a> {
    samples: &'a [f32],
    start: f64,
    end: f64,
    sample_rate: f64,
}

impl<'a> SampleTensor<'a> {
    /// Returns `None` when `start >= end` or there are no samples,
    /// meaning there is no selection to show.
    pub fn new(samples: &'a [f32], start: f64, end: f64, sample_rate: f64) -> Option<Self> {
        if samples.is_empty() || start >= end {
            return None;
        }
        Some(Self {
            samples,
            start,
            end,
            sample_rate,
        })
    }
}

impl fmt::Display for SampleTensor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// Showing {} samples from {:.4}s to {:.4}s",
            self.samples.len(),
            self.start,
            self.end
        )?;
        writeln!(f, "// Sample rate: {} Hz", self.sample_rate)?;
        f.write_str("// Amplitude values (from -1.0 to 1.0):\n")?;
        f.write_str("[\n  ")?;
        for (i, sample) in self.samples.iter().enumerate() {
            write!(f, "{:.4}, ", sample)?;
            if (i + 1) % SAMPLES_PER_LINE == 0 {
                f.write_str("\n  ")?;
            }
        }
        f.write_str("\n  ...\n]")
    }
}

/// Render the sample text, or `None` for an empty/degenerate range.
pub fn format_samples(samples: &[f32], start: f64, end: f64, sample_rate: f64) -> Option<String> {
    SampleTensor::new(samples, start, end, sample_rate).map(|t| t.to_string())
}
