use serde::{Deserialize, Serialize};

/// One physical monitor of the current topology.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub output: String,
    pub bbox: BBox,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub const fn new(bbox: BBox, output: String) -> Self {
        Self { output, bbox }
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let bbox = &self.bbox;
        (bbox.x <= x && x <= bbox.right()) && (bbox.y <= y && y <= bbox.bottom())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            output: String::default(),
            bbox: BBox {
                height: 600,
                width: 800,
                x: 0,
                y: 0,
            },
        }
    }
}

impl BBox {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Inclusive, as Xinerama and `XRandR` report monitor edges.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Smallest box covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x + 1, bottom - y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_side_by_side_monitors() {
        let left = BBox::new(0, 0, 1920, 1080);
        let right = BBox::new(1920, 0, 1280, 1024);
        assert_eq!(left.union(&right), BBox::new(0, 0, 3200, 1080));
    }

    #[test]
    fn screen_contains_its_last_pixel() {
        let screen = Screen::new(BBox::new(1920, 0, 1280, 1024), "HDMI-1".to_owned());
        assert!(screen.contains_point(3199, 1023));
        assert!(!screen.contains_point(3200, 0));
    }
}
