//! Rect and Span - Selection rectangles
//!
//! A [`Rect`] is whatever the caller selected: it may start at negative
//! coordinates, extend past the image, or have zero or negative size.
//! [`Rect::clamp_to`] turns it into a [`Span`], the half-open pixel range
//! the comparison kernel actually scans.

/// A rectangle in buffer pixel coordinates
///
/// This is a small `Copy` type with no validation; negative and
/// out-of-bounds values are resolved when it is clamped to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect covering a whole `width x height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Create a rect from two corner points, such as the start and end of
    /// a drag gesture. The result always has non-negative size.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, w) = if x1 <= x2 {
            (x1, x2.saturating_sub(x1))
        } else {
            (x2, x1.saturating_sub(x2))
        };
        let (y, h) = if y1 <= y2 {
            (y1, y2.saturating_sub(y1))
        } else {
            (y2, y1.saturating_sub(y2))
        };
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Get the area (negative sizes count as zero)
    #[inline]
    pub fn area(&self) -> i64 {
        self.w.max(0) as i64 * self.h.max(0) as i64
    }

    /// Check if the rect covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// Clamp the rect to a `width x height` buffer.
    ///
    /// Each edge is clamped independently into `[0, width]` / `[0, height]`;
    /// an inverted result collapses to an empty span at the left/top edge.
    pub fn clamp_to(&self, width: u32, height: u32) -> Span {
        let clamp = |v: i64, hi: u32| v.clamp(0, hi as i64) as u32;
        let x1 = clamp(self.x as i64, width);
        let y1 = clamp(self.y as i64, height);
        let x2 = clamp(self.right(), width).max(x1);
        let y2 = clamp(self.bottom(), height).max(y1);
        Span { x1, y1, x2, y2 }
    }
}

/// Half-open pixel range `x1..x2` by `y1..y2` inside a buffer
///
/// Invariant: `x1 <= x2 <= width` and `y1 <= y2 <= height` of the buffer it
/// was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Span {
    /// Span covering an entire buffer
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width,
            y2: height,
        }
    }

    /// Number of scanned columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Number of scanned rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Check if no pixel is scanned
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Width and height as reported for region statistics.
    ///
    /// Each side is floored at 1 so percentage and MSE denominators stay
    /// non-zero. A span empty in both directions therefore reports 1x1 while
    /// scanning nothing.
    pub fn reported_size(&self) -> (u32, u32) {
        (self.width().max(1), self.height().max(1))
    }
}
