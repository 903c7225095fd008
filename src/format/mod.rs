// src/format/mod.rs
//
// Pseudo-code text renderings of extracted regions.

mod samples;
mod tensor;

pub use samples::*;
pub use tensor::*;
