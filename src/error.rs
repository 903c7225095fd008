// src/error.rs
//
// Errors raised when a host hands over a malformed decoded buffer.
//
// Selections never fail; they clamp. The only thing that can be rejected
// is the raw data itself.

/// Error while wrapping decoded media data.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Value count does not fit the declared shape.
    SizeMismatch { expected: usize, actual: usize },

    /// Width or height is zero.
    ZeroDimension { width: u32, height: u32 },

    /// `width * height` pixels do not fit in memory on this target.
    TooLarge { width: u32, height: u32 },

    /// An audio clip was given without any channel data.
    NoChannels,

    /// A channel's length differs from channel 0.
    RaggedChannels {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    /// Sample rate is zero, negative, or not finite.
    InvalidSampleRate(f64),
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::SizeMismatch { expected, actual } => {
                write!(f, "Expected {} values, got {}", expected, actual)
            }
            BufferError::ZeroDimension { width, height } => {
                write!(f, "Buffer has an empty dimension ({}x{})", width, height)
            }
            BufferError::TooLarge { width, height } => {
                write!(f, "Buffer of {}x{} pixels is too large", width, height)
            }
            BufferError::NoChannels => write!(f, "Audio clip has no channels"),
            BufferError::RaggedChannels {
                channel,
                expected,
                actual,
            } => write!(
                f,
                "Channel {} has {} frames, expected {}",
                channel, actual, expected
            ),
            BufferError::InvalidSampleRate(rate) => {
                write!(f, "Invalid sample rate {}", rate)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Result of wrapping decoded media data.
pub type BufferResult<T> = Result<T, BufferError>;
