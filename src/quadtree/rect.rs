use core::fmt::Debug;

/// Axis-aligned box over the unsigned coordinate plane.
///
/// The box is half-open: it covers `x <= px < x + width` and `y <= py < y + height`.
/// Construction clamps the size so that `right()` and `bottom()` never wrap past
/// `u64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
}

impl Rect {
    pub const fn new(x: u64, y: u64, width: u64, height: u64) -> Self {
        let max_w = u64::MAX - x;
        let max_h = u64::MAX - y;

        Rect {
            x,
            y,
            width: if width > max_w { max_w } else { width },
            height: if height > max_h { max_h } else { height },
        }
    }

    /// Build a box from its corners, `left..right` and `top..bottom`. Inverted corners
    /// yield an empty box.
    pub const fn from_edges(left: u64, top: u64, right: u64, bottom: u64) -> Self {
        Rect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// The whole addressable plane, as far as a half-open box can reach.
    pub const fn plane() -> Self {
        Rect::new(0, 0, u64::MAX, u64::MAX)
    }

    pub const fn right(&self) -> u64 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u64 {
        self.y + self.height
    }

    /// A zero-area box matches nothing.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(&self, px: u64, py: u64) -> bool {
        self.x <= px && px < self.right() && self.y <= py && py < self.bottom()
    }

    /// Whether `other` lies entirely inside this box.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        !other.is_empty()
            && self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    pub const fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether halving this box still leaves non-empty quadrants.
    pub const fn can_split(&self) -> bool {
        self.width >= 2 && self.height >= 2
    }

    const fn half_width(&self) -> u64 {
        self.width / 2
    }

    const fn half_height(&self) -> u64 {
        self.height / 2
    }

    const fn mid_x(&self) -> u64 {
        self.x + self.half_width()
    }

    const fn mid_y(&self) -> u64 {
        self.y + self.half_height()
    }

    pub const fn nw(&self) -> Rect {
        Rect::new(self.x, self.y, self.half_width(), self.half_height())
    }

    pub const fn ne(&self) -> Rect {
        Rect::new(self.mid_x(), self.y, self.half_width(), self.half_height())
    }

    pub const fn sw(&self) -> Rect {
        Rect::new(self.x, self.mid_y(), self.half_width(), self.half_height())
    }

    pub const fn se(&self) -> Rect {
        Rect::new(self.mid_x(), self.mid_y(), self.half_width(), self.half_height())
    }

    /// Splits the box into its four quadrants: nw, ne, sw, se.
    ///
    /// On odd sizes the last row and column belong to none of them.
    pub const fn split(&self) -> [Rect; 4] {
        [self.nw(), self.ne(), self.sw(), self.se()]
    }
}

impl Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.x,
            self.right(),
            self.y,
            self.bottom()
        )
    }
}
