// src/selection.rs
//
// Selection update policy shared by every panel.
//
// Spatial selections are edited either by dragging a rectangle over the
// canvas or by typing/sliding one field at a time. Temporal selections are
// edited one bound at a time. Both only ever clamp; they never reject input.

use crate::region::Rect;

/// Round a pointer coordinate to a non-negative pixel index.
#[inline]
fn to_pixel(v: f64) -> u32 {
    // `as` saturates, and NaN becomes 0.
    v.max(0.0).round() as u32
}

// ═══════════════════════════════════════════════════════════════════════════
// Spatial selection
// ═══════════════════════════════════════════════════════════════════════════

/// A single field of a spatial selection, as edited by a numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    X,
    Y,
    Width,
    Height,
}

/// Rectangle selection plus the drag gesture currently editing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSelection {
    rect: Rect,
    /// Pointer position where the active drag started.
    anchor: Option<(f64, f64)>,
}

impl RegionSelection {
    pub fn new(rect: Rect) -> Self {
        Self { rect, anchor: None }
    }

    /// Default selection for a freshly loaded `width` x `height` buffer.
    pub fn for_buffer(width: u32, height: u32, extent: u32) -> Self {
        Self::new(Rect::new(0, 0, extent.min(width), extent.min(height)))
    }

    /// Recreate the selection after the source dimensions changed.
    pub fn reset_for(&mut self, width: u32, height: u32, extent: u32) {
        *self = Self::for_buffer(width, height, extent);
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    // -------------------------------
    // MARK: Drag gesture
    // -------------------------------

    /// Start a drag: remember the anchor and collapse to a zero-size rect.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.anchor = Some((x, y));
        self.rect = Rect::at(to_pixel(x), to_pixel(y));
    }

    /// Stretch the rectangle between the anchor and the pointer.
    ///
    /// Ignored when no drag is active.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Some((ax, ay)) = self.anchor else {
            return;
        };
        self.rect = Rect {
            x: to_pixel(x.min(ax)),
            y: to_pixel(y.min(ay)),
            width: to_pixel((x - ax).abs()),
            height: to_pixel((y - ay).abs()),
        };
    }

    /// Freeze the selection as-is. Zero-size selections are kept.
    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    // -------------------------------
    // MARK: Numeric controls
    // -------------------------------

    /// Replace one field, clamped to zero or more.
    pub fn set_field(&mut self, field: SelectionField, value: i64) {
        let v = value.clamp(0, u32::MAX as i64) as u32;
        match field {
            SelectionField::X => self.rect.x = v,
            SelectionField::Y => self.rect.y = v,
            SelectionField::Width => self.rect.width = v,
            SelectionField::Height => self.rect.height = v,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Temporal selection
// ═══════════════════════════════════════════════════════════════════════════

/// Time interval in seconds inside `[0, duration]`, with `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeSelection {
    start: f64,
    end: f64,
    duration: f64,
}

impl TimeSelection {
    /// Selection `[0, min(window, duration)]`.
    pub fn new(duration: f64, window: f64) -> Self {
        let duration = sanitize_duration(duration);
        Self {
            start: 0.0,
            end: window.max(0.0).min(duration),
            duration,
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Move the start bound. The end snaps forward if it would be passed.
    pub fn set_start(&mut self, seconds: f64) {
        if seconds.is_nan() {
            return;
        }
        self.start = seconds.clamp(0.0, self.duration);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Move the end bound. The start snaps back if it would be passed.
    pub fn set_end(&mut self, seconds: f64) {
        if seconds.is_nan() {
            return;
        }
        self.end = seconds.clamp(0.0, self.duration);
        if self.start > self.end {
            self.start = self.end;
        }
    }

    /// Change the duration, re-clamping both bounds.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize_duration(duration);
        self.end = self.end.min(self.duration);
        self.start = self.start.min(self.end);
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_drag_collapses_to_anchor() {
        let mut sel = RegionSelection::new(Rect::new(0, 0, 10, 10));
        sel.begin_drag(4.4, 7.6);
        assert!(sel.is_dragging());
        assert_eq!(sel.rect(), Rect::new(4, 8, 0, 0));
    }

    #[test]
    fn test_drag_any_direction() {
        let mut sel = RegionSelection::default();
        sel.begin_drag(20.0, 30.0);
        sel.drag_to(5.0, 40.0);
        assert_eq!(sel.rect(), Rect::new(5, 30, 15, 10));

        sel.drag_to(25.0, 10.0);
        assert_eq!(sel.rect(), Rect::new(20, 10, 5, 20));
    }

    #[test]
    fn test_drag_invariant() {
        let points = [
            (0.0, 0.0),
            (3.2, 9.7),
            (15.5, 2.49),
            (7.0, 7.0),
            (100.25, 0.5),
        ];
        for &(sx, sy) in &points {
            for &(ex, ey) in &points {
                let mut sel = RegionSelection::default();
                sel.begin_drag(sx, sy);
                sel.drag_to(ex, ey);
                sel.end_drag();
                let r = sel.rect();
                let dx: f64 = ex - sx;
                let dy: f64 = ey - sy;
                assert_eq!(r.width, dx.abs().round() as u32);
                assert_eq!(r.height, dy.abs().round() as u32);
                assert_eq!(r.x, ex.min(sx).round() as u32);
                assert_eq!(r.y, ey.min(sy).round() as u32);
            }
        }
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut sel = RegionSelection::new(Rect::new(1, 2, 3, 4));
        sel.drag_to(50.0, 50.0);
        assert_eq!(sel.rect(), Rect::new(1, 2, 3, 4));

        sel.begin_drag(0.0, 0.0);
        sel.drag_to(6.0, 6.0);
        sel.end_drag();
        sel.drag_to(50.0, 50.0);
        assert_eq!(sel.rect(), Rect::new(0, 0, 6, 6));
    }

    #[test]
    fn test_set_field_clamps_negative() {
        let mut sel = RegionSelection::new(Rect::new(5, 5, 5, 5));
        sel.set_field(SelectionField::X, -3);
        sel.set_field(SelectionField::Height, 12);
        assert_eq!(sel.rect(), Rect::new(0, 5, 5, 12));
    }

    #[test]
    fn test_default_selection_fits_small_buffer() {
        let sel = RegionSelection::for_buffer(4, 30, 10);
        assert_eq!(sel.rect(), Rect::new(0, 0, 4, 10));
    }

    #[test]
    fn test_time_selection_default_window() {
        let t = TimeSelection::new(2.0, 0.05);
        assert_eq!((t.start(), t.end()), (0.0, 0.05));

        let t = TimeSelection::new(0.01, 0.05);
        assert_eq!((t.start(), t.end()), (0.0, 0.01));
    }

    #[test]
    fn test_time_selection_snaps_other_bound() {
        let mut t = TimeSelection::new(1.0, 0.05);
        t.set_start(0.5);
        assert_eq!((t.start(), t.end()), (0.5, 0.5));

        t.set_end(0.8);
        t.set_end(0.2);
        assert_eq!((t.start(), t.end()), (0.2, 0.2));
    }

    #[test]
    fn test_time_selection_clamps_to_duration() {
        let mut t = TimeSelection::new(1.0, 0.05);
        t.set_end(5.0);
        assert_eq!(t.end(), 1.0);
        t.set_start(-2.0);
        assert_eq!(t.start(), 0.0);
        t.set_start(f64::NAN);
        assert_eq!(t.start(), 0.0);
    }

    #[test]
    fn test_time_selection_start_never_exceeds_end() {
        let mut t = TimeSelection::new(3.0, 0.05);
        let edits = [
            (true, 1.2),
            (false, 0.4),
            (true, 2.9),
            (false, 3.5),
            (true, -1.0),
            (false, 0.0),
            (true, 0.7),
        ];
        for (is_start, v) in edits {
            if is_start {
                t.set_start(v);
            } else {
                t.set_end(v);
            }
            assert!(t.start() <= t.end());
            assert!(t.end() <= t.duration());
        }
    }

    #[test]
    fn test_time_selection_shrinking_duration() {
        let mut t = TimeSelection::new(3.0, 0.05);
        t.set_end(2.5);
        t.set_start(2.0);
        t.set_duration(1.0);
        assert_eq!((t.start(), t.end()), (1.0, 1.0));
        assert!(t.is_degenerate());
    }
}
