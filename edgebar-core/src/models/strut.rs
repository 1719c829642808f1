use super::BBox;

/// The twelve cardinals of `_NET_WM_STRUT_PARTIAL`, in protocol order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Strut {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,

    pub left_start_y: i32,
    pub left_end_y: i32,

    pub right_start_y: i32,
    pub right_end_y: i32,

    pub top_start_x: i32,
    pub top_end_x: i32,

    pub bottom_start_x: i32,
    pub bottom_end_x: i32,
}

impl From<&[i64]> for Strut {
    fn from(slice: &[i64]) -> Self {
        let at = |index: usize| slice.get(index).copied().unwrap_or_default() as i32;
        Self {
            left: at(0),
            right: at(1),
            top: at(2),
            bottom: at(3),
            left_start_y: at(4),
            left_end_y: at(5),
            right_start_y: at(6),
            right_end_y: at(7),
            top_start_x: at(8),
            top_end_x: at(9),
            bottom_start_x: at(10),
            bottom_end_x: at(11),
        }
    }
}

impl Strut {
    /// Values in the order the property is written.
    #[must_use]
    pub const fn as_array(&self) -> [i32; 12] {
        [
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.left_start_y,
            self.left_end_y,
            self.right_start_y,
            self.right_end_y,
            self.top_start_x,
            self.top_end_x,
            self.bottom_start_x,
            self.bottom_end_x,
        ]
    }

    /// The legacy `_NET_WM_STRUT` prefix.
    #[must_use]
    pub const fn legacy(&self) -> [i32; 4] {
        [self.left, self.right, self.top, self.bottom]
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// Window managers measure struts from the edges of the root window, while
    /// the panel computes them against its own monitor. Shift each non-zero
    /// reservation by the gap between the monitor and the root edge.
    #[must_use]
    pub fn relative_to_root(&self, screen: &BBox, root: &BBox) -> Self {
        let mut strut = *self;
        if strut.left > 0 {
            strut.left += screen.left() - root.left();
        }
        if strut.right > 0 {
            strut.right += root.right() - screen.right();
        }
        if strut.top > 0 {
            strut.top += screen.top() - root.top();
        }
        if strut.bottom > 0 {
            strut.bottom += root.bottom() - screen.bottom();
        }
        strut
    }
}
