// src/view/waveform.rs
//
// Min/max overview of a whole channel, one column per horizontal pixel.

/// Extremes of the samples covered by one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformColumn {
    pub min: f32,
    pub max: f32,
}

impl WaveformColumn {
    /// Start values: any real sample replaces them.
    const EMPTY: WaveformColumn = WaveformColumn {
        min: 1.0,
        max: -1.0,
    };

    /// Vertical span `(top, bottom)` inside a viewport of `height`.
    ///
    /// Maps -1.0 to 0 and +1.0 to `height`, as the overview is drawn. An
    /// empty column collapses to a zero-height span at `height`.
    pub fn span(&self, height: f64) -> (f64, f64) {
        if self.is_empty() {
            return (height, height);
        }
        let amp = height / 2.0;
        ((1.0 + self.min as f64) * amp, (1.0 + self.max as f64) * amp)
    }

    /// True when no sample fell into this column.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Reduce `data` to `columns` min/max pairs.
///
/// Each column covers `ceil(len / columns)` samples; columns past the end
/// of the data stay empty.
pub fn waveform_overview(data: &[f32], columns: usize) -> Vec<WaveformColumn> {
    if columns == 0 {
        return Vec::new();
    }
    let step = data.len().div_ceil(columns);
    (0..columns)
        .map(|i| {
            let start = (i * step).min(data.len());
            let end = (start + step).min(data.len());
            data[start..end]
                .iter()
                .fold(WaveformColumn::EMPTY, |col, &s| WaveformColumn {
                    min: col.min.min(s),
                    max: col.max.max(s),
                })
        })
        .collect()
}
