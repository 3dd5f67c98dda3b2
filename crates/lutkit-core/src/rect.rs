//! Integer rectangles in image coordinates.
//!
//! Conversion routines operate on a pair of rectangles: the region of
//! definition (`rod`) describing the full extent of a buffer, and a
//! sub-window (`rect`) describing the pixels to actually touch. Both use
//! the same convention:
//!
//! - (x1, y1) is the **bottom-left** corner (inclusive)
//! - (x2, y2) is the **top-right** corner (exclusive)
//! - Y increases upward
//!
//! ```text
//!   Y
//!   ▲
//!   │   ┌──────────┐ (x2, y2)
//!   │   │  Image   │
//!   │   │  Region  │
//!   │   └──────────┘
//!   │ (x1, y1)
//! (0,0) ────────► X
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lutkit_core::RectI;
//!
//! let rod = RectI::new(0, 0, 1920, 1080);
//! let rect = RectI::new(100, 100, 500, 500);
//! assert!(rod.contains_rect(&rect));
//! assert_eq!(rod.width(), 1920);
//! ```

/// An axis-aligned integer rectangle in image coordinates (y-up).
///
/// The left/bottom edges are inclusive, the right/top edges exclusive,
/// so `width = x2 - x1` and `height = y2 - y1`.
///
/// # Invariants
///
/// - `x1 <= x2` and `y1 <= y2` for a valid rectangle
/// - A rectangle with `x1 == x2` or `y1 == y2` is empty
///
/// # Example
///
/// ```rust
/// use lutkit_core::RectI;
///
/// let r = RectI::new(10, 20, 110, 70);
/// assert_eq!(r.width(), 100);
/// assert_eq!(r.height(), 50);
/// assert_eq!(r.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct RectI {
    /// X coordinate of the left edge (inclusive)
    pub x1: i32,
    /// Y coordinate of the bottom edge (inclusive)
    pub y1: i32,
    /// X coordinate of the right edge (exclusive)
    pub x2: i32,
    /// Y coordinate of the top edge (exclusive)
    pub y2: i32,
}

impl RectI {
    /// Creates a rectangle from its corners.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a rectangle anchored at the origin with the given size.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutkit_core::RectI;
    ///
    /// let r = RectI::from_size(1920, 1080);
    /// assert_eq!(r.x1, 0);
    /// assert_eq!(r.y2, 1080);
    /// ```
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x1
    }

    /// Bottom edge (inclusive). This is row 0 of the buffer.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y1
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x2
    }

    /// Top edge (exclusive).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y2
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Number of pixels covered by this rectangle.
    #[inline]
    pub const fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.width() as u64 * self.height() as u64
        }
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/bottom edges, exclusive on the right/top.
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x1 && px < self.x2 && py >= self.y1 && py < self.y2
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// An empty `other` is contained by anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutkit_core::RectI;
    ///
    /// let rod = RectI::new(0, 0, 100, 100);
    /// let rect = RectI::new(10, 10, 60, 60);
    /// assert!(rod.contains_rect(&rect));
    /// ```
    #[inline]
    pub const fn contains_rect(&self, other: &RectI) -> bool {
        other.is_empty()
            || (other.x1 >= self.x1
                && other.y1 >= self.y1
                && other.x2 <= self.x2
                && other.y2 <= self.y2)
    }

    /// Returns the intersection with another rectangle.
    ///
    /// Returns `None` if the rectangles don't overlap.
    #[inline]
    pub fn intersect(&self, other: &RectI) -> Option<RectI> {
        let r = RectI::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Returns the bounding box containing both rectangles.
    #[inline]
    pub fn union(&self, other: &RectI) -> RectI {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        RectI::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    /// Returns this rectangle translated by (dx, dy).
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> RectI {
        RectI::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
}

impl std::fmt::Display for RectI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RectI([{},{}) x [{},{}))",
            self.x1, self.x2, self.y1, self.y2
        )
    }
}
