//! Which monitor edges are free for a panel.
use crate::config::Edge;
use crate::models::{BBox, Screen};

/// A panel may sit on an edge only when no other monitor continues past that
/// edge. Otherwise its strut would swallow the neighbouring monitor.
pub fn can_place_on(screens: &[Screen], index: usize, edge: Edge) -> bool {
    let Some(target) = screens.get(index) else {
        return false;
    };
    let target = target.bbox;
    let blocked = |s: &Screen| match edge {
        Edge::Top => s.bbox.bottom() < target.top(),
        Edge::Bottom => s.bbox.top() > target.bottom(),
        Edge::Left => s.bbox.right() < target.left(),
        Edge::Right => s.bbox.left() > target.right(),
    };
    !screens.iter().any(blocked)
}

/// First placeable screen for `edge`, scanning from `current` and wrapping.
/// Falls back to screen 0.
pub fn find_available_screen(screens: &[Screen], current: usize, edge: Edge) -> usize {
    let count = screens.len();
    let start = current.min(count);
    (start..count)
        .chain(0..start)
        .find(|&index| can_place_on(screens, index, edge))
        .unwrap_or(0)
}

/// The root window area: the union of every monitor.
pub fn root_area(screens: &[Screen]) -> Option<BBox> {
    let (first, rest) = screens.split_first()?;
    Some(rest.iter().fold(first.bbox, |area, s| area.union(&s.bbox)))
}
