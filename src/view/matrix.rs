// src/view/matrix.rs

use crate::pixel_buffer::{CHANNELS, PixelBuffer};

pub const MATRIX_PLACEHOLDER: &str = "Select a region to visualize.";

/// Swatch color: RGB bytes as-is, alpha normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn from_channels(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3] as f32 / 255.0,
        }
    }

    /// CSS `rgba(...)` form.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Grid of color swatches, one per selected pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelMatrix {
    Placeholder(&'static str),
    /// Rows top-to-bottom, each row left-to-right.
    Grid(Vec<Vec<Rgba>>),
}

impl PixelMatrix {
    pub fn from_region(region: Option<&PixelBuffer>) -> Self {
        match region.filter(|r| !r.is_empty()) {
            None => PixelMatrix::Placeholder(MATRIX_PLACEHOLDER),
            Some(region) => PixelMatrix::Grid(
                region
                    .rows()
                    .map(|row| {
                        row.chunks_exact(CHANNELS)
                            .map(|px| Rgba::from_channels([px[0], px[1], px[2], px[3]]))
                            .collect::<Vec<_>>()
                    })
                    .collect(),
            ),
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PixelMatrix::Placeholder(_))
    }

    /// `(columns, rows)`; zero for the placeholder.
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            PixelMatrix::Placeholder(_) => (0, 0),
            PixelMatrix::Grid(rows) => (rows.first().map_or(0, Vec::len), rows.len()),
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Rgba> {
        match self {
            PixelMatrix::Placeholder(_) => None,
            PixelMatrix::Grid(rows) => rows.get(y)?.get(x).copied(),
        }
    }
}
