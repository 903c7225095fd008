// src/panel/image.rs

use log::{debug, warn};

use crate::config::VisualizerConfig;
use crate::error::BufferResult;
use crate::format::TensorHeader;
use crate::pixel_buffer::PixelBuffer;
use crate::region::Rect;
use crate::selection::SelectionField;
use crate::view::PixelMatrix;

use super::{IMAGE_DATA_HINT, RegionPanel};

/// Still image tab.
#[derive(Debug, Clone, Default)]
pub struct ImagePanel {
    inner: RegionPanel,
}

impl ImagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        Self {
            inner: RegionPanel::new(config),
        }
    }

    /// Replace the image. Selection and numeric view start over.
    pub fn load(&mut self, image: PixelBuffer) {
        debug!("image panel: loaded {}x{}", image.width(), image.height());
        self.inner.clear();
        self.inner.set_frame(image);
    }

    /// Wrap host RGBA bytes and load them. On error the previous image
    /// stays in place.
    pub fn load_rgba(&mut self, width: u32, height: u32, data: Vec<u8>) -> BufferResult<()> {
        let image = PixelBuffer::from_rgba(width, height, data).inspect_err(|e| {
            warn!("image panel: rejected decoded image: {}", e);
        })?;
        self.load(image);
        Ok(())
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.inner.frame().is_some()
    }

    #[inline]
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.inner.frame()
    }

    #[inline]
    pub fn selection(&self) -> Rect {
        self.inner.selection()
    }

    pub fn extraction_rect(&self) -> Option<Rect> {
        self.inner.extraction_rect()
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

    pub fn set_field(&mut self, field: SelectionField, value: i64) {
        self.inner.set_field(field, value);
    }

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

    pub fn tensor_text(&self) -> String {
        self.inner.tensor_text(TensorHeader::Image)
    }

    pub fn data_text(&self) -> String {
        self.inner.data_text(TensorHeader::Image, IMAGE_DATA_HINT)
    }
}
