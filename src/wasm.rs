//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { mediatensor_init, MediaTensorImage } from './mediatensor.js';
//!
//! await init();
//! mediatensor_init();
//!
//! const panel = new MediaTensorImage();
//! const pixels = ctx.getImageData(0, 0, img.width, img.height);
//! panel.load(img.width, img.height, pixels.data);
//!
//! canvas.onmousedown = (e) => panel.pointer_down(x, y);
//! canvas.onmousemove = (e) => panel.pointer_move(x, y);
//! canvas.onmouseup = () => panel.pointer_up();
//!
//! panel.toggle_data();
//! pre.textContent = panel.data_text();
//! ```

use wasm_bindgen::prelude::*;

use crate::config::VisualizerConfig;
use crate::error::BufferResult;
use crate::panel::{AudioPanel, ImagePanel, VideoPanel};
use crate::sample_buffer::AudioClip;
use crate::selection::SelectionField;
use crate::transport::TransportCommand;
use crate::view::{PixelMatrix, WaveformColumn};

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn mediatensor_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Panel configuration.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct MediaTensorConfig {
    /// Initial selection width/height in pixels.
    pub default_selection_extent: u32,
    /// Largest extracted width/height in pixels.
    pub max_selection_extent: u32,
    /// Initial audio window in seconds.
    pub default_time_window: f64,
    /// Sample chart viewport width.
    pub chart_width: f64,
    /// Sample chart viewport height.
    pub chart_height: f64,
    /// Waveform overview height.
    pub waveform_height: f64,
}

#[wasm_bindgen]
impl MediaTensorConfig {
    /// Create a new configuration with default values.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for MediaTensorConfig {
    fn default() -> Self {
        let cfg = VisualizerConfig::default();
        Self {
            default_selection_extent: cfg.default_selection_extent,
            max_selection_extent: cfg.max_selection_extent,
            default_time_window: cfg.default_time_window,
            chart_width: cfg.chart_width,
            chart_height: cfg.chart_height,
            waveform_height: cfg.waveform_height,
        }
    }
}

impl From<MediaTensorConfig> for VisualizerConfig {
    fn from(c: MediaTensorConfig) -> Self {
        Self {
            default_selection_extent: c.default_selection_extent,
            max_selection_extent: c.max_selection_extent,
            default_time_window: c.default_time_window,
            chart_width: c.chart_width,
            chart_height: c.chart_height,
            waveform_height: c.waveform_height,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shared conversions
// ═══════════════════════════════════════════════════════════════════════════

/// What the host should do with its media element.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportAction {
    Play = 0,
    Pause = 1,
    Seek = 2,
}

fn action(cmd: TransportCommand) -> TransportAction {
    match cmd {
        TransportCommand::Play => TransportAction::Play,
        TransportCommand::Pause => TransportAction::Pause,
        TransportCommand::Seek(_) => TransportAction::Seek,
    }
}

fn field(index: u32) -> Option<SelectionField> {
    match index {
        0 => Some(SelectionField::X),
        1 => Some(SelectionField::Y),
        2 => Some(SelectionField::Width),
        3 => Some(SelectionField::Height),
        _ => None,
    }
}

/// Flatten matrix cells row by row to `[r, g, b, alpha, ...]`,
/// alpha already in [0, 1]. Empty for the placeholder.
fn flatten_cells(matrix: &PixelMatrix) -> Vec<f32> {
    match matrix {
        PixelMatrix::Placeholder(_) => Vec::new(),
        PixelMatrix::Grid(rows) => rows
            .iter()
            .flatten()
            .flat_map(|c| [c.r as f32, c.g as f32, c.b as f32, c.a])
            .collect(),
    }
}

/// Flatten columns to `[top0, bottom0, top1, bottom1, ...]`.
fn flatten_spans(columns: &[WaveformColumn], height: f64) -> Vec<f32> {
    columns
        .iter()
        .flat_map(|c| {
            let (top, bottom) = c.span(height);
            [top as f32, bottom as f32]
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Image panel
// ═══════════════════════════════════════════════════════════════════════════

/// Image tab state.
#[wasm_bindgen]
pub struct MediaTensorImage {
    inner: ImagePanel,
}

#[wasm_bindgen]
impl MediaTensorImage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MediaTensorImage {
        Self::new_with_config(MediaTensorConfig::default())
    }

    pub fn new_with_config(config: MediaTensorConfig) -> MediaTensorImage {
        MediaTensorImage {
            inner: ImagePanel::with_config(config.into()),
        }
    }

    /// Load decoded RGBA bytes (e.g. `ImageData.data`).
    /// Returns false if the byte count does not match the dimensions.
    pub fn load(&mut self, width: u32, height: u32, rgba: Vec<u8>) -> bool {
        match self.inner.load_rgba(width, height, rgba) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error loading image: {}", e);
                false
            }
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// Numeric control edit. Field: 0 = X, 1 = Y, 2 = Width, 3 = Height.
    pub fn set_field(&mut self, field_index: u32, value: f64) {
        if let Some(f) = field(field_index) {
            self.inner.set_field(f, value as i64);
        }
    }

    pub fn selection_x(&self) -> u32 {
        self.inner.selection().x
    }

    pub fn selection_y(&self) -> u32 {
        self.inner.selection().y
    }

    pub fn selection_width(&self) -> u32 {
        self.inner.selection().width
    }

    pub fn selection_height(&self) -> u32 {
        self.inner.selection().height
    }

    pub fn matrix_columns(&self) -> u32 {
        self.inner.pixel_matrix().dimensions().0 as u32
    }

    pub fn matrix_rows(&self) -> u32 {
        self.inner.pixel_matrix().dimensions().1 as u32
    }

    /// Matrix cell colors, row by row, as `[r, g, b, alpha, ...]`.
    pub fn matrix_cells(&self) -> Vec<f32> {
        flatten_cells(&self.inner.pixel_matrix())
    }

    pub fn toggle_data(&mut self) -> bool {
        self.inner.toggle_data()
    }

    pub fn data_text(&self) -> String {
        self.inner.data_text()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Video panel
// ═══════════════════════════════════════════════════════════════════════════

/// Video tab state.
#[wasm_bindgen]
pub struct MediaTensorVideo {
    inner: VideoPanel,
}

#[wasm_bindgen]
impl MediaTensorVideo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MediaTensorVideo {
        Self::new_with_config(MediaTensorConfig::default())
    }

    pub fn new_with_config(config: MediaTensorConfig) -> MediaTensorVideo {
        MediaTensorVideo {
            inner: VideoPanel::with_config(config.into()),
        }
    }

    /// A new file was picked.
    pub fn load_source(&mut self) {
        self.inner.load_source();
    }

    /// `loadedmetadata` handler.
    pub fn load_metadata(&mut self, width: u32, height: u32, duration: f64) {
        self.inner.load_metadata(width, height, duration);
    }

    /// Snapshot of the current frame. Call on pause and after seeking.
    pub fn capture_frame(&mut self, width: u32, height: u32, rgba: Vec<u8>) -> bool {
        match self.inner.capture_rgba(width, height, rgba) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error capturing frame: {}", e);
                false
            }
        }
    }

    /// Play/pause button. Returns the action to apply, or undefined before
    /// a source is loaded.
    pub fn toggle_play(&mut self) -> Option<TransportAction> {
        self.inner.toggle_play().map(action)
    }

    /// Stop button. When true, pause the element and rewind it to 0.
    pub fn stop(&mut self) -> bool {
        self.inner.stop().is_some()
    }

    /// Time slider. Returns the clamped position to seek to.
    pub fn seek(&mut self, seconds: f64) -> Option<f64> {
        match self.inner.seek(seconds) {
            Some(TransportCommand::Seek(t)) => Some(t),
            _ => None,
        }
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.inner.on_time_update(seconds);
    }

    pub fn on_play(&mut self) {
        self.inner.on_play();
    }

    pub fn on_pause(&mut self) {
        self.inner.on_pause();
    }

    pub fn on_ended(&mut self) {
        self.inner.on_ended();
    }

    pub fn is_playing(&self) -> bool {
        self.inner.playback().is_playing()
    }

    pub fn current_time(&self) -> f64 {
        self.inner.playback().current_time()
    }

    pub fn duration(&self) -> f64 {
        self.inner.playback().duration()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// Numeric control edit. Field: 0 = X, 1 = Y, 2 = Width, 3 = Height.
    pub fn set_field(&mut self, field_index: u32, value: f64) {
        if let Some(f) = field(field_index) {
            self.inner.set_field(f, value as i64);
        }
    }

    pub fn selection_x(&self) -> u32 {
        self.inner.selection().x
    }

    pub fn selection_y(&self) -> u32 {
        self.inner.selection().y
    }

    pub fn selection_width(&self) -> u32 {
        self.inner.selection().width
    }

    pub fn selection_height(&self) -> u32 {
        self.inner.selection().height
    }

    pub fn matrix_columns(&self) -> u32 {
        self.inner.pixel_matrix().dimensions().0 as u32
    }

    pub fn matrix_rows(&self) -> u32 {
        self.inner.pixel_matrix().dimensions().1 as u32
    }

    pub fn matrix_cells(&self) -> Vec<f32> {
        flatten_cells(&self.inner.pixel_matrix())
    }

    pub fn toggle_data(&mut self) -> bool {
        self.inner.toggle_data()
    }

    pub fn data_text(&self) -> String {
        self.inner.data_text()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Audio panel
// ═══════════════════════════════════════════════════════════════════════════

/// Audio tab state.
#[wasm_bindgen]
pub struct MediaTensorAudio {
    inner: AudioPanel,
}

impl MediaTensorAudio {
    fn load_clip(&mut self, clip: BufferResult<AudioClip>) -> bool {
        match clip {
            Ok(clip) => {
                self.inner.load(clip);
                true
            }
            Err(e) => {
                log::error!("Error loading audio: {}", e);
                false
            }
        }
    }
}

#[wasm_bindgen]
impl MediaTensorAudio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MediaTensorAudio {
        Self::new_with_config(MediaTensorConfig::default())
    }

    pub fn new_with_config(config: MediaTensorConfig) -> MediaTensorAudio {
        MediaTensorAudio {
            inner: AudioPanel::with_config(config.into()),
        }
    }

    /// Load one decoded channel (e.g. `AudioBuffer.getChannelData(0)`).
    pub fn load(&mut self, samples: Vec<f32>, sample_rate: f64) -> bool {
        self.load_clip(AudioClip::mono(samples, sample_rate))
    }

    /// Load planar data: all of channel 0, then all of channel 1, ...
    pub fn load_planar(&mut self, data: &[f32], channels: u32, sample_rate: f64) -> bool {
        self.load_clip(AudioClip::from_planar(data, channels as usize, sample_rate))
    }

    pub fn duration(&self) -> f64 {
        self.inner.time_selection().duration()
    }

    pub fn set_start(&mut self, seconds: f64) {
        self.inner.set_start(seconds);
    }

    pub fn set_end(&mut self, seconds: f64) {
        self.inner.set_end(seconds);
    }

    pub fn start(&self) -> f64 {
        self.inner.time_selection().start()
    }

    pub fn end(&self) -> f64 {
        self.inner.time_selection().end()
    }

    /// Copy of the selected samples (empty when nothing is selected).
    pub fn selected_samples(&self) -> Vec<f32> {
        self.inner.selected_samples().unwrap_or_default().to_vec()
    }

    /// SVG path data for the sample chart; empty when nothing is selected.
    pub fn chart_path(&self) -> String {
        self.inner.chart().path_data()
    }

    /// Overview column spans, flattened as `[top0, bottom0, top1, ...]`.
    pub fn waveform(&self, columns: u32) -> Vec<f32> {
        let height = self.inner.config().waveform_height;
        flatten_spans(&self.inner.waveform(columns as usize), height)
    }

    pub fn toggle_data(&mut self) -> bool {
        self.inner.toggle_data()
    }

    pub fn data_text(&self) -> String {
        self.inner.data_text()
    }

    pub fn toggle_play(&mut self) -> Option<TransportAction> {
        self.inner.toggle_play().map(action)
    }

    pub fn stop(&mut self) -> bool {
        self.inner.stop().is_some()
    }

    pub fn on_play(&mut self) {
        self.inner.on_play();
    }

    pub fn on_pause(&mut self) {
        self.inner.on_pause();
    }

    pub fn on_ended(&mut self) {
        self.inner.on_ended();
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.inner.on_time_update(seconds);
    }

    pub fn is_playing(&self) -> bool {
        self.inner.playback().is_playing()
    }
}
