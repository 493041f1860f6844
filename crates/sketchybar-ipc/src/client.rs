use crate::command::{command_tokens, EXECUTABLE};
use crate::query;
use crate::runner::{Invoker, Outcome, Runner};
use sbar_core::args::{Arg, Props};
use sbar_core::state::{BarState, ItemState};
use sbar_core::Result;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Screen anchor an item is added at.
///
/// `q` and `e` are sketchybar's spellings for the two sides of the notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Left,
    Right,
    Center,
    NotchLeft,
    NotchRight,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::NotchLeft => "q",
            Self::NotchRight => "e",
        })
    }
}

/// Animation curves accepted by `--animate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Circ,
    Exp,
    Sin,
    Tanh,
    Bounce,
    Overshoot,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::EaseIn => "easein",
            Self::EaseOut => "easeout",
            Self::EaseInOut => "easeinout",
            Self::Circ => "circ",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Tanh => "tanh",
            Self::Bounce => "bounce",
            Self::Overshoot => "overshoot",
        })
    }
}

/// Handle for issuing commands to the sketchybar process.
///
/// Every mutating or querying action goes through here; the client formats
/// the token sequence and the [`Invoker`] executes it synchronously.
pub struct Client {
    invoker: Box<dyn Invoker>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client backed by the real subprocess [`Runner`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_invoker(Box::new(Runner))
    }

    /// Client backed by an arbitrary invoker (tests use a recording one).
    #[must_use]
    pub fn with_invoker(invoker: Box<dyn Invoker>) -> Self {
        Self { invoker }
    }

    /// Flatten `args`, prefix the executable token and run the command.
    pub fn message(&self, args: &[Arg]) -> Result<Outcome> {
        let tokens = command_tokens(args);
        debug!(command = ?tokens, "invoking {EXECUTABLE}");
        self.invoker.invoke(&tokens)
    }

    /// `--add item <name> <position>`
    pub fn add_item(&self, name: &str, position: Position) -> Result<Outcome> {
        self.message(&[
            "--add".into(),
            "item".into(),
            name.into(),
            position.to_string().into(),
        ])
    }

    /// `--set <name> <key=value>…` — one batch, applied in order.
    pub fn set(&self, name: &str, props: &Props) -> Result<Outcome> {
        self.message(&["--set".into(), name.into(), props.clone().into()])
    }

    /// Set an item's icon text, hiding the icon slot when the text is blank.
    ///
    /// Surrounding newlines are stripped (command output is the usual
    /// source of these values) and `icon.drawing` is toggled to match, in
    /// the same `--set` batch.
    pub fn set_icon(&self, name: &str, value: &str) -> Result<Outcome> {
        self.set_slot(name, "icon", value)
    }

    /// Set an item's label text, hiding the label slot when the text is
    /// blank.  Same newline and `label.drawing` handling as
    /// [`set_icon`](Self::set_icon).
    pub fn set_label(&self, name: &str, value: &str) -> Result<Outcome> {
        self.set_slot(name, "label", value)
    }

    fn set_slot(&self, name: &str, slot: &str, value: &str) -> Result<Outcome> {
        let value = value.trim_matches('\n');
        let drawing = if value.is_empty() { "off" } else { "on" };
        let props = Props::new()
            .set(slot, value)
            .set(format!("{slot}.drawing"), drawing);
        self.set(name, &props)
    }

    /// `--subscribe <name> <event>…`
    pub fn subscribe(&self, name: &str, events: &[String]) -> Result<Outcome> {
        let list = events.iter().map(|e| Arg::from(e.as_str())).collect();
        self.message(&["--subscribe".into(), name.into(), Arg::List(list)])
    }

    /// `--bar <key=value>…` — global bar appearance.
    pub fn set_bar(&self, props: &Props) -> Result<Outcome> {
        self.message(&["--bar".into(), props.clone().into()])
    }

    /// `--default <key=value>…` — defaults inherited by newly added items.
    pub fn set_defaults(&self, props: &Props) -> Result<Outcome> {
        self.message(&["--default".into(), props.clone().into()])
    }

    /// `--update` — force a refresh of every item.
    pub fn trigger_update(&self) -> Result<Outcome> {
        self.message(&["--update".into()])
    }

    /// `--query <name>` kept as raw JSON, for properties the typed records
    /// don't cover.
    pub fn query_raw(&self, name: &str) -> Result<serde_json::Value> {
        let outcome = self.message(&["--query".into(), name.into()])?;
        query::parse_json(&outcome.stdout)
    }

    /// Query the global bar configuration.
    pub fn query_bar(&self) -> Result<BarState> {
        let outcome = self.message(&["--query".into(), "bar".into()])?;
        query::parse_bar(&outcome.stdout)
    }

    /// Query one item's state.
    pub fn query_item(&self, name: &str) -> Result<ItemState> {
        let outcome = self.message(&["--query".into(), name.into()])?;
        query::parse_item(&outcome.stdout)
    }

    /// Animate a property transition, then block until sketchybar has had
    /// time to render it (`duration` is in frames at 60 fps).
    ///
    /// The sleep keeps a follow-up command — typically the restore half of a
    /// transition — from landing mid-animation.
    pub fn animate(
        &self,
        name: &str,
        curve: Curve,
        duration: u32,
        props: &Props,
    ) -> Result<Outcome> {
        let outcome = self.animate_nowait(name, curve, duration, props)?;
        std::thread::sleep(Duration::from_secs_f64(f64::from(duration) / 60.0 * 1.1));
        Ok(outcome)
    }

    /// [`animate`](Self::animate) without the blocking sleep, for callers
    /// sequencing transitions themselves.
    pub fn animate_nowait(
        &self,
        name: &str,
        curve: Curve,
        duration: u32,
        props: &Props,
    ) -> Result<Outcome> {
        // Each setting is single-quoted: values may contain spaces and the
        // line goes through the shell verbatim.
        let settings: Vec<String> = props
            .iter()
            .map(|(k, v)| shell_quote(&format!("{k}={v}")))
            .collect();
        let line = format!(
            "{EXECUTABLE} --animate {curve} {duration} --set {name} {}",
            settings.join(" ")
        );
        debug!(%line, "animating via shell");
        self.invoker.shell(&line)
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
