//! Integer rectangles with X11 style inclusive edges.
#![allow(clippy::module_name_repetitions)]
use super::BBox;
use serde::{Deserialize, Serialize};

/// Window placement. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

/// Modifiable struct that can be used to generate an Xyhw struct.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct XyhwBuilder {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
}

impl From<XyhwBuilder> for Xyhw {
    fn from(xywh: XyhwBuilder) -> Self {
        Self {
            x: xywh.x,
            y: xywh.y,
            w: xywh.w.max(0),
            h: xywh.h.max(0),
        }
    }
}

impl From<BBox> for Xyhw {
    fn from(bbox: BBox) -> Self {
        XyhwBuilder {
            x: bbox.x,
            y: bbox.y,
            w: bbox.width,
            h: bbox.height,
        }
        .into()
    }
}

impl Xyhw {
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    /// Last column covered by the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Last row covered by the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value.max(0);
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value.max(0);
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        (self.x <= x && x <= self.right()) && (self.y <= y && y <= self.bottom())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_and_bottom_are_inclusive() {
        let rect: Xyhw = XyhwBuilder {
            x: 710,
            y: 1048,
            w: 500,
            h: 32,
        }
        .into();
        assert_eq!(rect.right(), 1209);
        assert_eq!(rect.bottom(), 1079);
    }

    #[test]
    fn contains_point_stops_at_last_pixel() {
        let rect: Xyhw = XyhwBuilder {
            x: 0,
            y: 0,
            w: 10,
            h: 10,
        }
        .into();
        assert!(rect.contains_point(9, 9));
        assert!(!rect.contains_point(10, 9));
        assert!(!rect.contains_point(-1, 0));
    }

    #[test]
    fn negative_sizes_are_clamped() {
        let rect: Xyhw = XyhwBuilder {
            w: -5,
            h: 3,
            ..XyhwBuilder::default()
        }
        .into();
        assert_eq!(rect.w(), 0);
        assert!(rect.is_empty());
    }
}
