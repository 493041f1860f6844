pub mod client;
pub mod command;
pub mod query;
pub mod runner;

pub use client::{Client, Curve, Position};
pub use command::{command_tokens, EXECUTABLE};
pub use query::{parse_bar, parse_item};
pub use runner::{Invoker, Outcome, Runner};
