// src/panel/video.rs
//
// Video tab.
//
// The frame buffer is a snapshot, not a live view: the host captures it
// again whenever playback pauses or seeks. While the video plays, the
// selection is locked.

use log::{debug, warn};

use crate::config::VisualizerConfig;
use crate::error::BufferResult;
use crate::format::TensorHeader;
use crate::pixel_buffer::PixelBuffer;
use crate::region::Rect;
use crate::selection::SelectionField;
use crate::transport::{PlaybackState, TransportCommand};
use crate::view::PixelMatrix;

use super::{RegionPanel, VIDEO_DATA_HINT};

#[derive(Debug, Clone, Default)]
pub struct VideoPanel {
    inner: RegionPanel,
    playback: PlaybackState,
    /// Playback position of the captured frame.
    frame_time: f64,
}

impl VideoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        Self {
            inner: RegionPanel::new(config),
            ..Self::default()
        }
    }

    // -------------------------------
    // MARK: Source lifecycle
    // -------------------------------

    /// A new file was picked: drop the old frame and playback state.
    pub fn load_source(&mut self) {
        debug!("video panel: new source");
        self.inner.clear();
        self.playback = PlaybackState::default();
        self.frame_time = 0.0;
    }

    /// Metadata arrived: dimensions and duration are now known.
    pub fn load_metadata(&mut self, width: u32, height: u32, duration: f64) {
        debug!(
            "video panel: metadata {}x{}, {:.2}s",
            width, height, duration
        );
        self.inner.set_dimensions(width, height);
        self.playback = PlaybackState::new(duration);
    }

    /// Store a snapshot of the frame at the current playback position.
    pub fn capture_frame(&mut self, frame: PixelBuffer) {
        self.frame_time = self.playback.current_time();
        self.inner.set_frame(frame);
    }

    pub fn capture_rgba(&mut self, width: u32, height: u32, data: Vec<u8>) -> BufferResult<()> {
        let frame = PixelBuffer::from_rgba(width, height, data).inspect_err(|e| {
            warn!("video panel: rejected frame: {}", e);
        })?;
        self.capture_frame(frame);
        Ok(())
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.inner.dimensions().is_some()
    }

    #[inline]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.inner.frame()
    }

    #[inline]
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    // -------------------------------
    // MARK: Transport
    // -------------------------------

    #[inline]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn toggle_play(&mut self) -> Option<TransportCommand> {
        if !self.is_loaded() {
            return None;
        }
        if !self.playback.is_playing() {
            // Selection is locked while playing.
            self.inner.pointer_up();
        }
        Some(self.playback.toggle())
    }

    pub fn stop(&mut self) -> Option<[TransportCommand; 2]> {
        self.is_loaded().then(|| self.playback.stop())
    }

    /// Time slider moved.
    pub fn seek(&mut self, seconds: f64) -> Option<TransportCommand> {
        self.is_loaded().then(|| self.playback.seek(seconds))
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        self.playback.on_time_update(seconds);
    }

    pub fn on_play(&mut self) {
        self.playback.on_play();
        self.inner.pointer_up();
    }

    pub fn on_pause(&mut self) {
        self.playback.on_pause();
    }

    pub fn on_ended(&mut self) {
        self.playback.on_ended();
    }

    // -------------------------------
    // MARK: Selection
    // -------------------------------

    #[inline]
    pub fn selection(&self) -> Rect {
        self.inner.selection()
    }

    pub fn extraction_rect(&self) -> Option<Rect> {
        self.inner.extraction_rect()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.playback.is_playing() {
            return;
        }
        self.inner.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    pub fn set_field(&mut self, field: SelectionField, value: i64) {
        if self.playback.is_playing() {
            return;
        }
        self.inner.set_field(field, value);
    }

    // -------------------------------
    // MARK: Derived views
    // -------------------------------

    pub fn selected_region(&self) -> Option<PixelBuffer> {
        self.inner.selected_region()
    }

    pub fn pixel_matrix(&self) -> PixelMatrix {
        self.inner.pixel_matrix()
    }

    #[inline]
    pub fn show_data(&self) -> bool {
        self.inner.show_data()
    }

    pub fn toggle_data(&mut self) -> bool {
        self.inner.toggle_data()
    }

    fn header(&self) -> TensorHeader {
        TensorHeader::VideoFrame {
            time: self.frame_time,
        }
    }

    pub fn tensor_text(&self) -> String {
        self.inner.tensor_text(self.header())
    }

    pub fn data_text(&self) -> String {
        self.inner.data_text(self.header(), VIDEO_DATA_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |_, _| [value, value, value, 255])
    }

    fn loaded() -> VideoPanel {
        let mut panel = VideoPanel::new();
        panel.load_source();
        panel.load_metadata(64, 48, 12.0);
        panel
    }

    #[test]
    fn test_metadata_sets_selection_and_duration() {
        let panel = loaded();
        assert_eq!(panel.selection(), Rect::new(0, 0, 10, 10));
        assert_eq!(panel.playback().duration(), 12.0);
        assert!(panel.frame().is_none());
        assert!(panel.pixel_matrix().is_placeholder());
    }

    #[test]
    fn test_selection_locked_while_playing() {
        let mut panel = loaded();
        assert_eq!(panel.toggle_play(), Some(TransportCommand::Play));

        panel.pointer_down(1.0, 1.0);
        panel.pointer_move(20.0, 20.0);
        panel.set_field(SelectionField::X, 30);
        assert_eq!(panel.selection(), Rect::new(0, 0, 10, 10));

        assert_eq!(panel.toggle_play(), Some(TransportCommand::Pause));
        panel.set_field(SelectionField::X, 30);
        assert_eq!(panel.selection().x, 30);
    }

    #[test]
    fn test_capture_records_time_in_header() {
        let mut panel = loaded();
        assert_eq!(panel.seek(3.456), Some(TransportCommand::Seek(3.456)));
        panel.capture_frame(solid(64, 48, 42));
        panel.set_field(SelectionField::Width, 2);
        panel.set_field(SelectionField::Height, 1);
        assert_eq!(panel.data_text(), VIDEO_DATA_HINT);

        panel.toggle_data();
        let text = panel.data_text();
        assert!(text.starts_with("// Showing 2x1 pixels from region (0,0) at time 3.46s\n"));
        assert!(text.contains("    [42, 42, 42, 255], // Pixel (1,0)\n"));
    }

    #[test]
    fn test_recapture_replaces_snapshot() {
        let mut panel = loaded();
        panel.capture_frame(solid(64, 48, 1));
        panel.on_time_update(5.0);
        panel.capture_frame(solid(64, 48, 2));
        let region = panel.selected_region().unwrap();
        assert_eq!(region.pixel(0, 0), Some([2, 2, 2, 255]));
        assert_eq!(panel.frame_time(), 5.0);
    }

    #[test]
    fn test_load_source_clears_everything() {
        let mut panel = loaded();
        panel.capture_frame(solid(64, 48, 1));
        panel.toggle_data();
        panel.toggle_play();

        panel.load_source();
        assert!(!panel.is_loaded());
        assert!(panel.frame().is_none());
        assert!(!panel.show_data());
        assert!(!panel.playback().is_playing());
        assert_eq!(panel.toggle_play(), None);
        assert_eq!(panel.stop(), None);
    }

    #[test]
    fn test_stop_rewinds() {
        let mut panel = loaded();
        panel.on_play();
        panel.on_time_update(7.0);
        assert_eq!(
            panel.stop(),
            Some([TransportCommand::Pause, TransportCommand::Seek(0.0)])
        );
        assert_eq!(panel.playback().current_time(), 0.0);
    }
}
