// src/region.rs
//
// Region clipping.
//
// A requested rectangle is best-effort: it is shrunk to whatever part of
// the buffer it actually covers. Nothing here can fail; a rectangle that
// misses the buffer entirely just becomes empty.

/// Axis-aligned rectangle in buffer pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-size rectangle at a point.
    pub const fn at(x: u32, y: u32) -> Self {
        Self::new(x, y, 0, 0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Clip to a `width` x `height` buffer.
    ///
    /// The origin is kept; the extent becomes `min(w, width - x)` and
    /// `min(h, height - y)`, floored at zero.
    pub fn clip_to(&self, width: u32, height: u32) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width.min(width.saturating_sub(self.x)),
            height: self.height.min(height.saturating_sub(self.y)),
        }
    }

    /// Limit width and height to `max`.
    pub fn capped(&self, max: u32) -> Rect {
        Rect {
            width: self.width.min(max),
            height: self.height.min(max),
            ..*self
        }
    }

    /// Clip to a buffer, then cap. This is what gets extracted.
    #[inline]
    pub fn extraction(&self, width: u32, height: u32, max: u32) -> Rect {
        self.clip_to(width, height).capped(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_overhanging_width() {
        let clipped = Rect::new(2, 3, 20, 5).clip_to(10, 10);
        assert_eq!(clipped, Rect::new(2, 3, 8, 5));
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let r = Rect::new(1, 1, 3, 4);
        assert_eq!(r.clip_to(10, 10), r);
    }

    #[test]
    fn test_clip_origin_outside_is_empty() {
        let clipped = Rect::new(12, 0, 5, 5).clip_to(10, 10);
        assert_eq!(clipped.width, 0);
        assert!(clipped.is_empty());

        let clipped = Rect::new(0, 10, 5, 5).clip_to(10, 10);
        assert_eq!(clipped.height, 0);
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_clip_never_exceeds_request_or_remaining_extent() {
        for bw in 0..6u32 {
            for bh in 0..6u32 {
                for x in 0..7u32 {
                    for w in 0..8u32 {
                        let req = Rect::new(x, 1, w, 3);
                        let c = req.clip_to(bw, bh);
                        assert!(c.width <= req.width);
                        assert!(c.height <= req.height);
                        assert!(c.width <= bw.saturating_sub(x));
                        assert!(c.height <= bh.saturating_sub(1));
                    }
                }
            }
        }
    }

    #[test]
    fn test_capped_and_extraction() {
        let r = Rect::new(0, 0, 500, 150);
        assert_eq!(r.capped(200), Rect::new(0, 0, 200, 150));
        assert_eq!(r.extraction(300, 1000, 200), Rect::new(0, 0, 200, 150));
        assert_eq!(r.extraction(120, 1000, 200), Rect::new(0, 0, 120, 150));
    }

    #[test]
    fn test_zero_size_is_empty() {
        assert!(Rect::at(4, 4).is_empty());
        assert_eq!(Rect::at(4, 4).area(), 0);
        assert_eq!(Rect::new(0, 0, 3, 2).area(), 6);
    }
}
