use std::path::PathBuf;
use std::str::FromStr;

/// Environment variables sketchybar sets when invoking a plugin script.
pub const ENV_SCRIPT: &str = "_";
pub const ENV_BAR_NAME: &str = "BAR_NAME";
pub const ENV_NAME: &str = "NAME";
pub const ENV_INFO: &str = "INFO";
pub const ENV_SENDER: &str = "SENDER";
pub const ENV_CONFIG_DIR: &str = "CONFIG_DIR";
pub const ENV_BUTTON: &str = "BUTTON";
pub const ENV_MODIFIER: &str = "MODIFIER";
pub const ENV_SCROLL_DELTA: &str = "SCROLL_DELTA";

/// Mouse button reported with a `mouse.clicked` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

impl FromStr for MouseButton {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Keyboard modifier held during a click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Cmd,
    Fn,
}

impl FromStr for Modifier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shift" => Ok(Self::Shift),
            "ctrl" => Ok(Self::Ctrl),
            "alt" => Ok(Self::Alt),
            "cmd" => Ok(Self::Cmd),
            "fn" => Ok(Self::Fn),
            _ => Err(()),
        }
    }
}

/// The invocation context sketchybar hands a plugin script, captured once at
/// process start and passed into the controller explicitly.
///
/// An empty `name` means this invocation is the initial load of the config
/// script rather than a delivered event — the one branch condition between
/// setup and dispatch.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Path of the invoked script (`$_`), used as the item's `script` property.
    pub script: Option<PathBuf>,
    /// Name of the bar instance, when running multiple bars.
    pub bar_name: Option<String>,
    /// Name of the item this invocation belongs to; empty on initial load.
    pub name: String,
    /// Free-form payload for the triggering event (e.g. battery percentage).
    pub info: Option<String>,
    /// The event that caused the invocation (e.g. `mouse.clicked`).
    pub sender: Option<String>,
    /// Directory holding the sketchybar configuration.
    pub config_dir: Option<PathBuf>,
    pub button: Option<MouseButton>,
    pub modifier: Option<Modifier>,
    pub scroll_delta: Option<i32>,
}

impl Event {
    /// Capture the event context from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build an event from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests inject a closure over a plain map so
    /// they never touch the real process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            script: lookup(ENV_SCRIPT).map(PathBuf::from),
            bar_name: lookup(ENV_BAR_NAME),
            name: lookup(ENV_NAME).unwrap_or_default(),
            info: lookup(ENV_INFO),
            sender: lookup(ENV_SENDER),
            config_dir: lookup(ENV_CONFIG_DIR).map(PathBuf::from),
            button: lookup(ENV_BUTTON).and_then(|s| s.parse().ok()),
            modifier: lookup(ENV_MODIFIER).and_then(|s| s.parse().ok()),
            scroll_delta: lookup(ENV_SCROLL_DELTA).and_then(|s| s.parse().ok()),
        }
    }

    /// `true` when no event name is present, i.e. this is the initial load.
    #[must_use]
    pub fn is_load(&self) -> bool {
        self.name.is_empty()
    }
}
