// src/pixel_buffer.rs

use crate::error::{BufferError, BufferResult};
use crate::region::Rect;

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Byte length of a `width` x `height` RGBA buffer, `None` on overflow.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// Decoded RGBA pixels, row-major, one byte per channel.
///
/// Captured once from an image or a paused video frame and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> BufferResult<Self> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let expected = byte_len(width, height).ok_or(BufferError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(byte_len(width, height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Channel values at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Iterate rows top-to-bottom; each row yields pixels left-to-right.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1) as usize * CHANNELS)
    }

    /// Copy out the part of `rect` that lies inside the buffer.
    ///
    /// Returns `None` when the clipped rectangle is empty.
    pub fn region(&self, rect: Rect) -> Option<PixelBuffer> {
        let clip = rect.clip_to(self.width, self.height);
        if clip.is_empty() {
            return None;
        }

        let row_bytes = clip.width as usize * CHANNELS;
        let mut data = Vec::with_capacity(clip.area() * CHANNELS);
        for y in clip.y..clip.y + clip.height {
            let start = (y as usize * self.width as usize + clip.x as usize) * CHANNELS;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }

        Some(PixelBuffer {
            width: clip.width,
            height: clip.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord_buffer(width: u32, height: u32) -> PixelBuffer {
        // Encodes the coordinate in R/G so positions can be checked.
        PixelBuffer::from_fn(width, height, |x, y| [x as u8, y as u8, 7, 255])
    }

    #[test]
    fn test_from_rgba_checks_length() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            BufferError::SizeMismatch {
                expected: 16,
                actual: 15
            }
        );
        assert!(PixelBuffer::from_rgba(0, 2, Vec::new()).is_err());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_from_rgba_rejects_overflowing_dims() {
        let (width, height) = (u32::MAX, u32::MAX);
        assert_eq!(
            PixelBuffer::from_rgba(width, height, Vec::new()),
            Err(BufferError::TooLarge { width, height })
        );
        assert!(matches!(
            PixelBuffer::from_rgba(1 << 31, 1 << 31, Vec::new()),
            Err(BufferError::TooLarge { .. })
        ));
        // Byte count fits on 64-bit targets but the data does not match.
        assert!(matches!(
            PixelBuffer::from_rgba(1 << 15, 1 << 14, Vec::new()),
            Err(BufferError::SizeMismatch { actual: 0, .. }) | Err(BufferError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let buf = PixelBuffer::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(buf.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 1), None);
    }

    #[test]
    fn test_region_clips_and_copies_rows() {
        let buf = coord_buffer(10, 10);
        let region = buf.region(Rect::new(2, 3, 20, 5)).unwrap();
        assert_eq!((region.width(), region.height()), (8, 5));
        assert_eq!(region.pixel(0, 0), Some([2, 3, 7, 255]));
        assert_eq!(region.pixel(7, 4), Some([9, 7, 7, 255]));
        assert_eq!(region.data().len(), 8 * 5 * CHANNELS);
        assert_eq!(region.data()[..4], [2, 3, 7, 255]);
    }

    #[test]
    fn test_region_empty_selection() {
        let buf = coord_buffer(4, 4);
        assert!(buf.region(Rect::at(1, 1)).is_none());
        assert!(buf.region(Rect::new(4, 0, 2, 2)).is_none());
    }

    #[test]
    fn test_rows_order() {
        let buf = coord_buffer(3, 2);
        let rows: Vec<&[u8]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0..4], [0, 1, 7, 255]);
        assert_eq!(rows[1][8..12], [2, 1, 7, 255]);
    }
}
