use crate::item::ItemSpec;
use sbar_core::args::Props;
use sbar_core::{Event, Result};
use sbar_ipc::Client;
use tracing::{debug, info, warn};

/// An event handler bound to an item name.
pub type Handler = Box<dyn FnMut(&Client, &Event) -> Result<()>>;

struct Registration {
    name: String,
    spec: Option<ItemSpec>,
    handler: Option<Handler>,
}

/// What a [`Controller::run`] invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Initial load: items were created.
    Setup { registered: usize },
    /// A handler matching the event name ran.
    Handled,
    /// No handler matched the event name (logged, never fatal).
    Unhandled,
}

/// Ties the captured [`Event`] to a table of declared items and handlers.
///
/// Each script invocation constructs a fresh controller and calls [`run`]
/// once.  With no event name present this is the initial load: every enabled
/// [`ItemSpec`] is created, then a global `--update` is issued.  With a name
/// present exactly one same-named handler is dispatched; nothing is ever
/// re-registered on that path.
///
/// [`run`]: Controller::run
pub struct Controller {
    client: Client,
    event: Event,
    registrations: Vec<Registration>,
    on_load: Option<Box<dyn FnOnce(&Client) -> Result<()>>>,
}

impl Controller {
    #[must_use]
    pub fn new(client: Client, event: Event) -> Self {
        Self {
            client,
            event,
            registrations: Vec::new(),
            on_load: None,
        }
    }

    /// Controller over the real sketchybar binary and the process
    /// environment — the entry point for plugin scripts.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Client::new(), Event::from_env())
    }

    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Hook run first on the setup path, before any item is created.
    /// Typically applies `--bar` / `--default` configuration.
    #[must_use]
    pub fn on_load(mut self, hook: impl FnOnce(&Client) -> Result<()> + 'static) -> Self {
        self.on_load = Some(Box::new(hook));
        self
    }

    /// Declare a bar item together with its same-named event handler.
    #[must_use]
    pub fn item(
        mut self,
        spec: ItemSpec,
        handler: impl FnMut(&Client, &Event) -> Result<()> + 'static,
    ) -> Self {
        self.registrations.push(Registration {
            name: spec.name().to_string(),
            spec: Some(spec),
            handler: Some(Box::new(handler)),
        });
        self
    }

    /// Declare a bar item with no handler (e.g. a static separator).
    #[must_use]
    pub fn item_static(mut self, spec: ItemSpec) -> Self {
        self.registrations.push(Registration {
            name: spec.name().to_string(),
            spec: Some(spec),
            handler: None,
        });
        self
    }

    /// Register a handler without creating an item, for names sketchybar
    /// dispatches that are not items declared here.
    #[must_use]
    pub fn on(
        mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Client, &Event) -> Result<()> + 'static,
    ) -> Self {
        self.registrations.push(Registration {
            name: name.into(),
            spec: None,
            handler: Some(Box::new(handler)),
        });
        self
    }

    /// Branch on the captured event: setup when no name is present, dispatch
    /// otherwise.
    pub fn run(mut self) -> Result<RunOutcome> {
        if self.event.is_load() {
            self.setup()
        } else {
            self.dispatch()
        }
    }

    fn setup(&mut self) -> Result<RunOutcome> {
        if let Some(hook) = self.on_load.take() {
            hook(&self.client)?;
        }

        let mut registered = 0;
        for registration in &self.registrations {
            let Some(spec) = &registration.spec else {
                continue;
            };
            if !spec.enabled {
                debug!(item = %spec.name(), "skipping disabled item");
                continue;
            }
            self.create_item(spec)?;
            registered += 1;
        }

        self.client.trigger_update()?;
        info!(registered, "initial load complete");
        Ok(RunOutcome::Setup { registered })
    }

    /// Issue exactly one `--add`, at most one `--set` and at most one
    /// `--subscribe` for a declared item.
    fn create_item(&self, spec: &ItemSpec) -> Result<()> {
        debug!(item = %spec.name(), position = %spec.position, "adding item");
        self.client.add_item(spec.name(), spec.position)?;

        let mut props = Props::new()
            .set("icon", spec.icon.clone().unwrap_or_else(|| "+".to_string()))
            .set(
                "label",
                spec.label.clone().unwrap_or_else(|| spec.name().to_string()),
            );
        if let Some(script) = &self.event.script {
            props.insert("script", script.display().to_string());
        }
        if spec.update_freq > 0 {
            props.insert("update_freq", spec.update_freq);
        }
        // Declared extras last, so they override any of the defaults above.
        props.extend(&spec.properties);
        self.client.set(spec.name(), &props)?;

        if !spec.subscriptions.is_empty() {
            self.client.subscribe(spec.name(), &spec.subscriptions)?;
        }
        Ok(())
    }

    fn dispatch(&mut self) -> Result<RunOutcome> {
        let name = self.event.name.clone();
        let handler = self
            .registrations
            .iter_mut()
            .find(|r| r.name == name)
            .and_then(|r| r.handler.as_mut());

        match handler {
            Some(handler) => {
                debug!(%name, "dispatching event");
                handler(&self.client, &self.event)?;
                Ok(RunOutcome::Handled)
            }
            None => {
                warn!(%name, "no handler for event");
                Ok(RunOutcome::Unhandled)
            }
        }
    }
}
