// src/config.rs
//
// Tunables shared by the panel controllers and the bindings.

/// Side length of the selection created when a new image or frame loads.
pub const DEFAULT_SELECTION_EXTENT: u32 = 10;

/// Largest width/height extracted from a selection.
pub const MAX_SELECTION_EXTENT: u32 = 200;

/// Length in seconds of the time selection created when audio loads.
pub const DEFAULT_TIME_WINDOW: f64 = 0.05;

/// Logical viewport of the sample chart.
pub const CHART_WIDTH: f64 = 400.0;
pub const CHART_HEIGHT: f64 = 100.0;

/// Logical height of the waveform overview.
pub const WAVEFORM_HEIGHT: f64 = 100.0;

/// Configuration for a visualizer panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizerConfig {
    /// Initial selection width/height, clipped to the buffer.
    pub default_selection_extent: u32,
    /// Cap applied to every extracted region, however it was selected.
    pub max_selection_extent: u32,
    /// Initial time selection length in seconds.
    pub default_time_window: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub waveform_height: f64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            default_selection_extent: DEFAULT_SELECTION_EXTENT,
            max_selection_extent: MAX_SELECTION_EXTENT,
            default_time_window: DEFAULT_TIME_WINDOW,
            chart_width: CHART_WIDTH,
            chart_height: CHART_HEIGHT,
            waveform_height: WAVEFORM_HEIGHT,
        }
    }
}
