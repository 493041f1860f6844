//! A clock item that re-renders itself on every routine invocation.

use anyhow::Result;
use chrono::Local;
use sketchybar::{Controller, ItemSpec, Position, Props};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Controller::from_env()
        .item(
            ItemSpec::new("clock")
                .position(Position::Right)
                .icon("⏰")
                .update_freq(10),
            |client, _event| {
                let now = Local::now().format("%H:%M").to_string();
                client.set("clock", &Props::new().set("label", now))?;
                Ok(())
            },
        )
        .run()?;

    Ok(())
}
