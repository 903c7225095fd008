// src/transport.rs
//
// Playback state mirrored from the host's media element.
//
// The host owns the clock and does the actual playing. This side only:
// - remembers what the element last reported (playing, time, duration)
// - turns button presses into commands the host should carry out

/// Action the host should perform on its media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    Play,
    Pause,
    /// Jump to an absolute position in seconds.
    Seek(f64),
}

/// Last known state of the media element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    playing: bool,
    current_time: f64,
    duration: f64,
}

impl PlaybackState {
    pub fn new(duration: f64) -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    // -------------------------------
    // MARK: User actions
    // -------------------------------

    /// Play/pause button.
    ///
    /// The flag flips immediately; the host confirms through its events.
    pub fn toggle(&mut self) -> TransportCommand {
        self.playing = !self.playing;
        if self.playing {
            TransportCommand::Play
        } else {
            TransportCommand::Pause
        }
    }

    /// Stop button: pause and rewind.
    pub fn stop(&mut self) -> [TransportCommand; 2] {
        self.playing = false;
        self.current_time = 0.0;
        [TransportCommand::Pause, TransportCommand::Seek(0.0)]
    }

    /// Time slider. Clamped to `[0, duration]`; NaN seeks to 0.
    pub fn seek(&mut self, seconds: f64) -> TransportCommand {
        self.current_time = if seconds.is_nan() {
            0.0
        } else {
            seconds.clamp(0.0, self.duration)
        };
        TransportCommand::Seek(self.current_time)
    }

    // -------------------------------
    // MARK: Host events
    // -------------------------------

    pub fn on_play(&mut self) {
        self.playing = true;
    }

    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    pub fn on_ended(&mut self) {
        self.playing = false;
    }

    /// `timeupdate` / `seeked`.
    pub fn on_time_update(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.current_time = seconds.max(0.0);
        }
    }
}
