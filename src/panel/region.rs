// src/panel/region.rs
//
// Selection state shared by the image and video panels.

use log::debug;

use crate::config::VisualizerConfig;
use crate::format::{TensorHeader, format_pixel_tensor};
use crate::pixel_buffer::PixelBuffer;
use crate::region::Rect;
use crate::selection::{RegionSelection, SelectionField};
use crate::view::PixelMatrix;

/// A captured RGBA frame, the rectangle selected on it, and whether the
/// numeric view is open.
#[derive(Debug, Clone)]
pub struct RegionPanel {
    config: VisualizerConfig,
    /// Source size; known before the first frame for video.
    dimensions: Option<(u32, u32)>,
    frame: Option<PixelBuffer>,
    selection: RegionSelection,
    show_data: bool,
}

impl RegionPanel {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            config,
            dimensions: None,
            frame: None,
            selection: RegionSelection::default(),
            show_data: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    #[inline]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    #[inline]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    #[inline]
    pub fn selection(&self) -> Rect {
        self.selection.rect()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    #[inline]
    pub fn show_data(&self) -> bool {
        self.show_data
    }

    // -------------------------------
    // MARK: Source lifecycle
    // -------------------------------

    /// Forget everything about the previous source.
    pub fn clear(&mut self) {
        self.dimensions = None;
        self.frame = None;
        self.selection = RegionSelection::default();
        self.show_data = false;
    }

    /// New source dimensions: recreate the default selection.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        debug!("region panel: source is {}x{}", width, height);
        self.dimensions = Some((width, height));
        self.selection
            .reset_for(width, height, self.config.default_selection_extent);
    }

    /// Replace the captured frame. The selection survives unless the
    /// frame's size differs from the known source size.
    pub fn set_frame(&mut self, frame: PixelBuffer) {
        let dims = (frame.width(), frame.height());
        if self.dimensions != Some(dims) {
            self.set_dimensions(dims.0, dims.1);
        }
        self.frame = Some(frame);
    }

    // -------------------------------
    // MARK: Selection edits
    // -------------------------------

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.dimensions.is_none() {
            return;
        }
        self.selection.begin_drag(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.selection.drag_to(x, y);
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        self.selection.end_drag();
    }

    pub fn set_field(&mut self, field: SelectionField, value: i64) {
        self.selection.set_field(field, value);
    }

    // -------------------------------
    // MARK: Derived views
    // -------------------------------

    /// Part of the selection that will be extracted: clipped to the source
    /// and capped. `None` when nothing would be extracted.
    pub fn extraction_rect(&self) -> Option<Rect> {
        let (w, h) = self.dimensions?;
        let rect = self
            .selection
            .rect()
            .extraction(w, h, self.config.max_selection_extent);
        (!rect.is_empty()).then_some(rect)
    }

    pub fn selected_region(&self) -> Option<PixelBuffer> {
        let frame = self.frame.as_ref()?;
        frame.region(self.extraction_rect()?)
    }

    pub fn pixel_matrix(&self) -> PixelMatrix {
        PixelMatrix::from_region(self.selected_region().as_ref())
    }

    /// Tensor text for the current selection, rebuilt on every call.
    pub fn tensor_text(&self, header: TensorHeader) -> String {
        let rect = self.selection.rect();
        format_pixel_tensor(self.selected_region().as_ref(), (rect.x, rect.y), header)
    }

    /// Flip the numeric view. Does nothing before a source is loaded.
    pub fn toggle_data(&mut self) -> bool {
        if self.dimensions.is_some() {
            self.show_data = !self.show_data;
        }
        self.show_data
    }

    /// What the numeric area should show right now: the tensor text, or
    /// `hint` while the numeric view is closed.
    pub fn data_text(&self, header: TensorHeader, hint: &str) -> String {
        if self.show_data {
            self.tensor_text(header)
        } else {
            hint.to_string()
        }
    }
}

impl Default for RegionPanel {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NO_PIXEL_DATA;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| [x as u8, y as u8, 128, 255])
    }

    #[test]
    fn test_frame_sets_default_selection() {
        let mut panel = RegionPanel::default();
        panel.set_frame(gradient(32, 6));
        assert_eq!(panel.selection(), Rect::new(0, 0, 10, 6));
        assert_eq!(panel.extraction_rect(), Some(Rect::new(0, 0, 10, 6)));
    }

    #[test]
    fn test_same_size_frame_keeps_selection() {
        let mut panel = RegionPanel::default();
        panel.set_frame(gradient(20, 20));
        panel.set_field(SelectionField::X, 5);
        panel.set_frame(gradient(20, 20));
        assert_eq!(panel.selection().x, 5);

        panel.set_frame(gradient(30, 20));
        assert_eq!(panel.selection().x, 0);
    }

    #[test]
    fn test_extraction_is_capped() {
        let config = VisualizerConfig {
            max_selection_extent: 4,
            ..VisualizerConfig::default()
        };
        let mut panel = RegionPanel::new(config);
        panel.set_frame(gradient(50, 50));
        panel.pointer_down(1.0, 1.0);
        panel.pointer_move(31.0, 21.0);
        panel.pointer_up();

        assert_eq!(panel.selection(), Rect::new(1, 1, 30, 20));
        let region = panel.selected_region().unwrap();
        assert_eq!((region.width(), region.height()), (4, 4));
        assert_eq!(region.pixel(0, 0), Some([1, 1, 128, 255]));
    }

    #[test]
    fn test_zero_size_drag_has_no_data() {
        let mut panel = RegionPanel::default();
        panel.set_frame(gradient(8, 8));
        panel.pointer_down(3.0, 3.0);
        panel.pointer_up();

        assert!(panel.selected_region().is_none());
        assert!(panel.pixel_matrix().is_placeholder());
        assert_eq!(panel.tensor_text(TensorHeader::Image), NO_PIXEL_DATA);
    }

    #[test]
    fn test_pointer_ignored_without_source() {
        let mut panel = RegionPanel::default();
        panel.pointer_down(3.0, 3.0);
        assert!(!panel.is_dragging());
        assert!(!panel.toggle_data());
    }

    #[test]
    fn test_data_text_hint_until_toggled() {
        let mut panel = RegionPanel::default();
        panel.set_frame(gradient(2, 2));
        assert_eq!(panel.data_text(TensorHeader::Image, "hint"), "hint");

        assert!(panel.toggle_data());
        let text = panel.data_text(TensorHeader::Image, "hint");
        assert!(text.starts_with("// Showing 2x2 pixels from region (0,0)\n"));

        // Regenerated after the selection changes.
        panel.set_field(SelectionField::X, 1);
        let text = panel.data_text(TensorHeader::Image, "hint");
        assert!(text.starts_with("// Showing 1x2 pixels from region (1,0)\n"));
    }
}
