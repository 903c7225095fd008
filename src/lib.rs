// src/lib.rs
//
// Library entry point: selection, extraction and formatting of decoded
// media buffers, plus host bindings for browsers (web) and Swift (ios).

mod config;
mod error;
mod format;
mod panel;
mod pixel_buffer;
mod region;
mod sample_buffer;
mod selection;
mod transport;
mod view;

#[cfg(feature = "ios")]
pub mod ffi;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use config::*;
pub use error::{BufferError, BufferResult};
pub use format::{
    NO_PIXEL_DATA, PixelTensor, SAMPLES_PER_LINE, SampleTensor, TensorHeader,
    format_pixel_tensor, format_samples,
};
pub use panel::{
    AUDIO_DATA_HINT, AudioPanel, IMAGE_DATA_HINT, ImagePanel, NO_SAMPLE_DATA, RegionPanel,
    VIDEO_DATA_HINT, VideoPanel,
};
pub use pixel_buffer::{CHANNELS, PixelBuffer};
pub use region::Rect;
pub use sample_buffer::AudioClip;
pub use selection::{RegionSelection, SelectionField, TimeSelection};
pub use transport::{PlaybackState, TransportCommand};
pub use view::{
    CHART_PLACEHOLDER, ChartPoint, MATRIX_PLACEHOLDER, PixelMatrix, Rgba, SampleChart,
    WaveformColumn, waveform_overview,
};
