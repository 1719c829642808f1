//! Where the panel goes and how much of the screen it reserves.
use crate::config::{Alignment, Edge, Orientation, PanelConfig, AUTOHIDE_SIZE, PANEL_MINIMUM_SIZE};
use crate::models::{AutohideMachine, BBox, Handle, Strut, Xyhw, XyhwBuilder};

/// Derived from the settings on every realign, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelGeometry {
    pub rect: Xyhw,
    pub strut: Strut,
}

/// Panel thickness before autohide is applied.
pub fn shown_thickness(config: &PanelConfig) -> i32 {
    config.panel_size.max(PANEL_MINIMUM_SIZE)
}

/// Compute the panel rectangle on `screen` and the strut reserving it.
///
/// `min_length` is the space the hosted plugins need along the long axis.
pub fn recompute<H: Handle>(
    config: &PanelConfig,
    screen: &BBox,
    autohide: &AutohideMachine<H>,
    min_length: i32,
) -> PanelGeometry {
    let edge = config.position;
    let hidden = autohide.is_hidden();
    let thickness = if hidden {
        AUTOHIDE_SIZE
    } else {
        shown_thickness(config)
    };

    let extent = match edge.orientation() {
        Orientation::Horizontal => screen.width,
        Orientation::Vertical => screen.height,
    };
    let length = panel_length(config, extent, min_length);

    let (start, span) = match edge.orientation() {
        Orientation::Horizontal => (screen.x, screen.width),
        Orientation::Vertical => (screen.y, screen.height),
    };
    let offset = match config.alignment {
        Alignment::Left => start,
        Alignment::Center => start + (span - length) / 2,
        Alignment::Right => start + span - length,
    };

    let rect: Xyhw = match edge {
        Edge::Top => XyhwBuilder {
            x: offset,
            y: screen.y,
            w: length,
            h: thickness,
        },
        Edge::Bottom => XyhwBuilder {
            x: offset,
            y: screen.y + screen.height - thickness,
            w: length,
            h: thickness,
        },
        Edge::Left => XyhwBuilder {
            x: screen.x,
            y: offset,
            w: thickness,
            h: length,
        },
        Edge::Right => XyhwBuilder {
            x: screen.x + screen.width - thickness,
            y: offset,
            w: thickness,
            h: length,
        },
    }
    .into();

    // While autohide is on the reservation stays at the sentinel, even when
    // the pointer has the panel shown, so maximized windows don't jump.
    let reserved = if config.autohide {
        AUTOHIDE_SIZE
    } else {
        thickness
    };

    PanelGeometry {
        rect,
        strut: strut_for(edge, &rect, screen, reserved),
    }
}

fn panel_length(config: &PanelConfig, extent: i32, min_length: i32) -> i32 {
    // Widths come straight from the settings file.
    let extent = i64::from(extent.max(0));
    let width = i64::from(config.width);
    let requested = if config.width_percent {
        extent * width / 100
    } else if width <= 0 {
        extent + width
    } else {
        width
    };
    let length = requested.max(i64::from(min_length)).min(extent).max(0);
    i32::try_from(length).unwrap_or_default()
}

fn strut_for(edge: Edge, rect: &Xyhw, screen: &BBox, reserved: i32) -> Strut {
    // An empty screen has its right edge left of its left edge.
    let right = screen.right().max(screen.left());
    let bottom = screen.bottom().max(screen.top());
    let clamp_x = |x: i32| x.clamp(screen.left(), right);
    let clamp_y = |y: i32| y.clamp(screen.top(), bottom);
    match edge {
        Edge::Top => Strut {
            top: reserved,
            top_start_x: clamp_x(rect.x()),
            top_end_x: clamp_x(rect.right()),
            ..Strut::default()
        },
        Edge::Bottom => Strut {
            bottom: reserved,
            bottom_start_x: clamp_x(rect.x()),
            bottom_end_x: clamp_x(rect.right()),
            ..Strut::default()
        },
        Edge::Left => Strut {
            left: reserved,
            left_start_y: clamp_y(rect.y()),
            left_end_y: clamp_y(rect.bottom()),
            ..Strut::default()
        },
        Edge::Right => Strut {
            right: reserved,
            right_start_y: clamp_y(rect.y()),
            right_end_y: clamp_y(rect.bottom()),
            ..Strut::default()
        },
    }
}
