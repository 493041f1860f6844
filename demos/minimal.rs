//! Minimal plugin script: a battery item plus a click-to-flash clock.
//!
//! Point sketchybar at the compiled binary from `sketchybarrc`; run manually
//! with `RUST_LOG=debug` to watch the issued commands.

use anyhow::Result;
use sketchybar::{config, Animation, Client, Controller, Curve, Event, ItemSpec, Position, Props};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let event = Event::from_env();
    let cfg = config::load(config::default_path(event.config_dir.as_deref()))?;

    let outcome = Controller::new(Client::new(), event)
        .on_load(move |client| {
            client.set_bar(&cfg.bar.to_props())?;
            client.set_defaults(&config::table_to_props(&cfg.defaults))?;
            Ok(())
        })
        .item(
            ItemSpec::new("battery")
                .position(Position::Right)
                .icon("⚡")
                .subscribe("power_source_change")
                .subscribe("system_woke")
                .update_freq(120),
            |client, event| {
                let label = match event.info.as_deref() {
                    Some(pct) => format!("{pct}%"),
                    None => String::new(), // blank hides the label slot
                };
                client.set_label("battery", &label)?;
                Ok(())
            },
        )
        .item(
            ItemSpec::new("flash").position(Position::Center).label("click me"),
            |client, _event| {
                let fade = Animation::begin(
                    client,
                    "flash",
                    Curve::Tanh,
                    30,
                    &Props::new().set("label.color.alpha", 0.0),
                    Props::new().set("label.color.alpha", 1.0),
                )?;
                fade.finish()?;
                Ok(())
            },
        )
        .run()?;

    tracing::info!(?outcome, "invocation finished");
    Ok(())
}
