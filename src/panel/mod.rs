// src/panel/mod.rs
//
// Panel controllers.
//
// Each panel owns the state behind one tab of the visualizer: the decoded
// buffer, the user's selection, the "show numeric data" flag and, for
// timed media, the playback state. Hosts forward their UI events here and
// read back render models and text.
//
// Key principles:
// - Panels are independent; nothing is shared between them
// - Loading replaces every piece of state in one call
// - Nothing here fails on bad selections; views fall back to placeholders

mod audio;
mod image;
mod region;
mod video;

pub use audio::*;
pub use image::*;
pub use region::*;
pub use video::*;

// Shown in the numeric area until the user asks for the data.
pub const IMAGE_DATA_HINT: &str = "// Click \"Show numeric data\" to see the tensor...";
pub const VIDEO_DATA_HINT: &str = "// Pause the video and click \"Show numeric data\"...";
pub const AUDIO_DATA_HINT: &str = "// Click \"Show numeric data\" to see the samples...";
