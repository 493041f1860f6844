use serde::{Deserialize, Serialize};
use std::fmt;

/// The `on` / `off` toggle sketchybar uses for boolean properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnOff {
    On,
    #[default]
    Off,
}

impl OnOff {
    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}

/// Screen edge the bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
}

impl fmt::Display for BarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

/// Visibility of the bar: `current` hides it on the active display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hidden {
    On,
    Off,
    Current,
}

/// Stacking behavior: `window` keeps the bar above regular windows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topmost {
    On,
    Off,
    Window,
}

/// Which displays the bar is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Display {
    Named(DisplayName),
    /// Explicit list of display ids.
    Ids(Vec<u32>),
}

impl Default for Display {
    fn default() -> Self {
        Self::Named(DisplayName::Main)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayName {
    Main,
    All,
}

/// Global bar configuration as reported by `sketchybar --query bar`.
///
/// Read-only from this library's perspective: the only mutation path is
/// issuing a new `--bar` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarState {
    pub color: String,
    pub border_color: String,
    #[serde(default)]
    pub position: BarPosition,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub notch_display_height: u32,
    #[serde(default)]
    pub margin: i32,
    #[serde(default)]
    pub y_offset: i32,
    #[serde(default)]
    pub corner_radius: u32,
    #[serde(default)]
    pub border_width: u32,
    #[serde(default)]
    pub blur_radius: u32,
    #[serde(default)]
    pub padding_left: i32,
    #[serde(default)]
    pub padding_right: i32,
    #[serde(default = "default_notch_width")]
    pub notch_width: u32,
    #[serde(default)]
    pub notch_offset: i32,
    #[serde(default)]
    pub display: Display,

    pub hidden: Hidden,
    pub topmost: Topmost,
    pub sticky: OnOff,
    pub font_smoothing: OnOff,
    pub shadow: OnOff,
    pub show_in_fullscreen: OnOff,
    pub drawing: OnOff,

    /// Item names in bar order, when any items exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

fn default_height() -> u32 {
    25
}

fn default_notch_width() -> u32 {
    200
}

/// One rendered slot of an item (its icon or its label).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TextSlot {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub drawing: OnOff,
}

/// State of a single bar item as reported by `sketchybar --query <name>`.
///
/// Only the commonly used fields are typed; everything else the query reports
/// is retained verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemState {
    pub name: String,
    #[serde(default)]
    pub drawing: OnOff,
    #[serde(default)]
    pub icon: TextSlot,
    #[serde(default)]
    pub label: TextSlot,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
