use super::{PANEL_DEFAULT_ICON_SIZE, PANEL_DEFAULT_LINE_COUNT, PANEL_DEFAULT_SIZE};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Edge {
    Top,
    Left,
    #[default]
    Bottom,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown panel position \"{0}\"")]
pub struct ParseEdgeError(pub String);

impl Edge {
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Left => "Left",
            Self::Bottom => "Bottom",
            Self::Right => "Right",
        }
    }

    /// Parse a stored position, falling back to `Bottom`.
    pub fn from_str_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            tracing::warn!("{}, using {}", err, Self::default());
            Self::default()
        })
    }
}

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "left" => Ok(Self::Left),
            "bottom" => Ok(Self::Bottom),
            "right" => Ok(Self::Right),
            _ => Err(ParseEdgeError(s.to_owned())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement along the panel's long axis. Stored as -1, 0 and 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "i32", into = "i32")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl From<i32> for Alignment {
    fn from(value: i32) -> Self {
        match value {
            i32::MIN..=-1 => Self::Left,
            0 => Self::Center,
            _ => Self::Right,
        }
    }
}

impl From<Alignment> for i32 {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => -1,
            Alignment::Center => 0,
            Alignment::Right => 1,
        }
    }
}

fn lenient_edge<'de, D>(deserializer: D) -> Result<Edge, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(Edge::from_str_lenient(&value))
}

/// One panel's persisted settings group.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PanelConfig {
    /// Index of the monitor the panel lives on.
    #[serde(rename = "desktop")]
    pub screen: usize,
    #[serde(deserialize_with = "lenient_edge")]
    pub position: Edge,
    #[serde(rename = "panelSize")]
    pub panel_size: i32,
    #[serde(rename = "iconSize")]
    pub icon_size: i32,
    #[serde(rename = "lineCount")]
    pub line_count: i32,
    /// Percent of the screen when `width_percent`, pixels otherwise. A
    /// non-positive pixel value is subtracted from the screen extent.
    pub width: i32,
    #[serde(rename = "width-percent")]
    pub width_percent: bool,
    pub alignment: Alignment,
    #[serde(rename = "autohideTb")]
    pub autohide: bool,
    /// Settings groups of the hosted plugins, in display order.
    pub plugins: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            screen: 0,
            position: Edge::Bottom,
            panel_size: PANEL_DEFAULT_SIZE,
            icon_size: PANEL_DEFAULT_ICON_SIZE,
            line_count: PANEL_DEFAULT_LINE_COUNT,
            width: 100,
            width_percent: true,
            alignment: Alignment::Center,
            autohide: false,
            plugins: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_parsing_ignores_case() {
        assert_eq!("top".parse::<Edge>(), Ok(Edge::Top));
        assert_eq!(" Right ".parse::<Edge>(), Ok(Edge::Right));
        assert!("diagonal".parse::<Edge>().is_err());
    }

    #[test]
    fn malformed_position_falls_back_to_bottom() {
        assert_eq!(Edge::from_str_lenient("sideways"), Edge::Bottom);
    }

    #[test]
    fn alignment_maps_signed_ints() {
        assert_eq!(Alignment::from(-5), Alignment::Left);
        assert_eq!(Alignment::from(0), Alignment::Center);
        assert_eq!(Alignment::from(3), Alignment::Right);
        assert_eq!(i32::from(Alignment::Left), -1);
    }

    #[test]
    fn orientation_follows_edge() {
        assert_eq!(Edge::Top.orientation(), Orientation::Horizontal);
        assert_eq!(Edge::Left.orientation(), Orientation::Vertical);
    }

    #[test]
    fn defaults_match_a_fresh_panel() {
        let config = PanelConfig::default();
        assert_eq!(config.panel_size, 32);
        assert_eq!(config.icon_size, 22);
        assert_eq!(config.line_count, 1);
        assert_eq!(config.width, 100);
        assert!(config.width_percent);
        assert_eq!(config.position, Edge::Bottom);
    }
}
