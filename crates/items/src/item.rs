use sbar_core::args::{PropertyValue, Props};
use sbar_ipc::Position;

/// Declaration of one bar item: everything needed to create it on the
/// setup pass.
///
/// Specs are collected by the [`Controller`](crate::Controller) and realized
/// exactly once, on the invocation that carries no event name.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) icon: Option<String>,
    pub(crate) label: Option<String>,
    pub(crate) update_freq: u32,
    pub(crate) subscriptions: Vec<String>,
    pub(crate) properties: Props,
    pub(crate) enabled: bool,
}

impl ItemSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::Left,
            icon: None,
            label: None,
            update_freq: 0,
            subscriptions: Vec::new(),
            properties: Props::new(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Icon text; defaults to `"+"` when unset.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Label text; defaults to the item name when unset.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Seconds between routine script invocations (0 = never).
    #[must_use]
    pub fn update_freq(mut self, seconds: u32) -> Self {
        self.update_freq = seconds;
        self
    }

    /// Subscribe the item to a sketchybar event at creation.
    #[must_use]
    pub fn subscribe(mut self, event: impl Into<String>) -> Self {
        self.subscriptions.push(event.into());
        self
    }

    /// Extra `key=value` setting applied at creation; overrides any default
    /// with the same key (icon, label, script, update_freq).
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Keep the declaration around but skip it at setup.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
