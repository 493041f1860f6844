pub mod args;
pub mod error;
pub mod event;
pub mod state;

pub use args::{flatten, Arg, PropertyValue, Props};
pub use error::{Result, SbarError};
pub use event::{Event, Modifier, MouseButton};
pub use state::{BarPosition, BarState, ItemState, OnOff};
