// src/panel/audio.rs
//
// Audio tab: a time window over channel 0 of the decoded clip.

use log::{debug, warn};

use crate::config::VisualizerConfig;
use crate::error::BufferResult;
use crate::format::format_samples;
use crate::sample_buffer::AudioClip;
use crate::selection::TimeSelection;
use crate::transport::{PlaybackState, TransportCommand};
use crate::view::{SampleChart, WaveformColumn, waveform_overview};

use super::AUDIO_DATA_HINT;

/// Numeric area text when the time window holds no samples.
pub const NO_SAMPLE_DATA: &str = "// No samples in the selected range.";

/// Channel shown by the chart, the overview and the numeric view.
const DISPLAY_CHANNEL: usize = 0;

#[derive(Debug, Clone, Default)]
pub struct AudioPanel {
    config: VisualizerConfig,
    clip: Option<AudioClip>,
    time: TimeSelection,
    playback: PlaybackState,
    show_data: bool,
}

impl AudioPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the clip. The time window goes back to its default.
    pub fn load(&mut self, clip: AudioClip) {
        let duration = clip.duration();
        debug!(
            "audio panel: loaded {} channel(s), {} frames @ {} Hz",
            clip.num_channels(),
            clip.frames(),
            clip.sample_rate()
        );
        self.time = TimeSelection::new(duration, self.config.default_time_window);
        self.playback = PlaybackState::new(duration);
        self.show_data = false;
        self.clip = Some(clip);
    }

    /// Wrap decoded channel data and load it. On error the previous clip
    /// stays in place.
    pub fn load_channels(&mut self, channels: Vec<Vec<f32>>, sample_rate: f64) -> BufferResult<()> {
        let clip = AudioClip::new(channels, sample_rate).inspect_err(|e| {
            warn!("audio panel: rejected decoded audio: {}", e);
        })?;
        self.load(clip);
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.clip.is_some()
    }

    #[inline]
    pub fn clip(&self) -> Option<&AudioClip> {
        self.clip.as_ref()
    }

    // -------------------------------
    // MARK: Time selection
    // -------------------------------

    #[inline]
    pub fn time_selection(&self) -> &TimeSelection {
        &self.time
    }

    pub fn set_start(&mut self, seconds: f64) {
        self.time.set_start(seconds);
    }

    pub fn set_end(&mut self, seconds: f64) {
        self.time.set_end(seconds);
    }

    // -------------------------------
    // MARK: Derived views
    // -------------------------------

    /// Samples of the displayed channel inside the time window.
    pub fn selected_samples(&self) -> Option<&[f32]> {
        self.clip.as_ref()?.slice(DISPLAY_CHANNEL, &self.time)
    }

    pub fn chart(&self) -> SampleChart {
        SampleChart::from_samples(
            self.selected_samples().unwrap_or_default(),
            self.config.chart_width,
            self.config.chart_height,
        )
    }

    /// Min/max overview of the whole displayed channel.
    pub fn waveform(&self, columns: usize) -> Vec<WaveformColumn> {
        self.clip
            .as_ref()
            .and_then(|clip| clip.channel(DISPLAY_CHANNEL))
            .map(|data| waveform_overview(data, columns))
            .unwrap_or_default()
    }

    /// Sample text, or `None` when the window holds no samples.
    pub fn sample_text(&self) -> Option<String> {
        let clip = self.clip.as_ref()?;
        format_samples(
            self.selected_samples()?,
            self.time.start(),
            self.time.end(),
            clip.sample_rate(),
        )
    }

    #[inline]
    pub fn show_data(&self) -> bool {
        self.show_data
    }

    pub fn toggle_data(&mut self) -> bool {
        if self.clip.is_some() {
            self.show_data = !self.show_data;
        }
        self.show_data
    }

    pub fn data_text(&self) -> String {
        if !self.show_data {
            return AUDIO_DATA_HINT.to_string();
        }
        self.sample_text()
            .unwrap_or_else(|| NO_SAMPLE_DATA.to_string())
    }

    // -------------------------------
    // MARK: Transport
    // -------------------------------

    #[inline]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn toggle_play(&mut self) -> Option<TransportCommand> {
        self.clip.is_some().then(|| self.playback.toggle())
    }

    pub fn stop(&mut self) -> Option<[TransportCommand; 2]> {
        self.clip.is_some().then(|| self.playback.stop())
    }

    pub fn on_play(&mut self) {
        self.playback.on_play();
    }

    pub fn on_pause(&mut self) {
        self.playback.on_pause();
    }

    pub fn on_ended(&mut self) {
        self.playback.on_ended();
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.playback.on_time_update(seconds);
    }
}
