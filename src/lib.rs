//! sketchybar — a typed binding layer around the `sketchybar` binary.
//!
//! The library formats command-line invocations of sketchybar, parses its
//! JSON query responses into typed records, and gives plugin scripts a
//! declarative registration/dispatch API: declare items once, and each
//! script invocation either creates them (initial load) or routes the
//! delivered event to the matching handler.
//!
//! ```no_run
//! use sketchybar::{Controller, ItemSpec, Position};
//!
//! fn main() -> anyhow::Result<()> {
//!     let outcome = Controller::from_env()
//!         .item(
//!             ItemSpec::new("battery")
//!                 .position(Position::Right)
//!                 .subscribe("power_source_change"),
//!             |client, event| {
//!                 let pct = event.info.as_deref().unwrap_or("?");
//!                 client.set("battery", &sketchybar::Props::new().set("label", format!("{pct}%")))?;
//!                 Ok(())
//!             },
//!         )
//!         .run()?;
//!     tracing::debug!(?outcome, "done");
//!     Ok(())
//! }
//! ```

pub use sbar_core::{
    args::{flatten, Arg, PropertyValue, Props},
    error::{Result, SbarError},
    event::{Event, Modifier, MouseButton},
    state::{BarPosition, BarState, ItemState, OnOff},
};
pub use sbar_ipc::{command_tokens, Client, Curve, Invoker, Outcome, Position, Runner};
pub use sbar_items::{Animation, Controller, ItemSpec, RunOutcome};

pub use sbar_config as config;
