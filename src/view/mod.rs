// src/view/mod.rs
//
// Render models for the graphical side of each panel.
//
// These are plain data: the host decides how to paint a cell, a path,
// or a waveform column.

mod chart;
mod matrix;
mod waveform;

pub use chart::*;
pub use matrix::*;
pub use waveform::*;
