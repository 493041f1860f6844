use sbar_core::args::Props;
use sbar_core::state::BarPosition;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `sbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SbarConfig {
    /// Global bar appearance, applied via `--bar` on initial load.
    pub bar: BarSettings,
    /// Free-form settings inherited by every new item, applied via
    /// `--default` before any item is added.
    pub defaults: toml::Table,
}

impl Default for SbarConfig {
    fn default() -> Self {
        Self {
            bar: BarSettings::default(),
            defaults: default_item_settings(),
        }
    }
}

/// Global bar settings.
///
/// Unknown keys land in `extras` and are forwarded untouched, so the whole
/// `--bar` property surface stays reachable without a schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    /// Whether the bar sits at the top or the bottom of the screen.
    pub position: BarPosition,
    /// Bar height in points.
    pub height: u32,
    /// Background color (`0xAARRGGBB`).
    pub color: String,
    pub blur_radius: u32,
    pub corner_radius: u32,
    pub margin: i32,
    pub y_offset: i32,
    pub padding_left: i32,
    pub padding_right: i32,
    /// Arbitrary extra `key = value` settings forwarded to `--bar`.
    #[serde(flatten)]
    pub extras: toml::Table,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            position: BarPosition::Top,
            height: 28,
            color: "0xdd222222".to_string(),
            blur_radius: 20,
            corner_radius: 9,
            margin: 3,
            y_offset: 3,
            padding_left: 4,
            padding_right: 4,
            extras: toml::Table::new(),
        }
    }
}

impl BarSettings {
    /// Render the settings as an ordered property batch: typed fields first,
    /// in declaration order, then the extras in the table's (key-sorted,
    /// deterministic) order.  Extras can override a typed field.
    #[must_use]
    pub fn to_props(&self) -> Props {
        let mut props = Props::new()
            .set("position", self.position.to_string())
            .set("height", self.height)
            .set("color", self.color.as_str())
            .set("blur_radius", self.blur_radius)
            .set("corner_radius", self.corner_radius)
            .set("margin", i64::from(self.margin))
            .set("y_offset", i64::from(self.y_offset))
            .set("padding_left", i64::from(self.padding_left))
            .set("padding_right", i64::from(self.padding_right));
        props.extend(&table_to_props(&self.extras));
        props
    }
}

/// Convert a flat TOML table into an ordered property batch.
///
/// Booleans become sketchybar's `on`/`off`; nested tables, arrays and dates
/// have no `key=value` rendering and are skipped with a warning.
#[must_use]
pub fn table_to_props(table: &toml::Table) -> Props {
    let mut props = Props::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => props.insert(key.as_str(), s.as_str()),
            toml::Value::Integer(n) => props.insert(key.as_str(), *n),
            toml::Value::Float(x) => props.insert(key.as_str(), *x),
            toml::Value::Boolean(b) => {
                props.insert(key.as_str(), if *b { "on" } else { "off" });
            }
            other => {
                tracing::warn!(%key, "skipping config value with no key=value form: {other}");
            }
        }
    }
    props
}

/// The settings every new item starts from (original library defaults).
fn default_item_settings() -> toml::Table {
    let mut table = toml::Table::new();
    let entries: &[(&str, toml::Value)] = &[
        ("background.color", "0x99777777".into()),
        ("background.corner_radius", 5i64.into()),
        ("background.height", 18i64.into()),
        ("padding_left", 3i64.into()),
        ("padding_right", 3i64.into()),
        ("icon.font", "sketchybar-app-font:Regular:16.0".into()),
        ("label.font", "FiraCode Nerd Font:Bold:12.0".into()),
        ("icon.color", "0xffffffff".into()),
        ("label.color", "0xffffffff".into()),
        ("icon.padding_left", 6i64.into()),
        ("icon.padding_right", 6i64.into()),
        ("label.padding_left", 4i64.into()),
        ("label.padding_right", 4i64.into()),
    ];
    for (key, value) in entries {
        table.insert((*key).to_string(), value.clone());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbar_core::args::PropertyValue;

    #[test]
    fn default_bar_props_match_the_stock_appearance() {
        let props = BarSettings::default().to_props();
        assert_eq!(
            props.get("position").unwrap(),
            &PropertyValue::from("top")
        );
        assert_eq!(props.get("height").unwrap(), &PropertyValue::Int(28));
        assert_eq!(
            props.get("color").unwrap(),
            &PropertyValue::from("0xdd222222")
        );
    }

    #[test]
    fn typed_fields_come_before_extras() {
        let raw = r#"
            [bar]
            height = 32
            shadow = true
        "#;
        let config: SbarConfig = toml::from_str(raw).unwrap();
        let props = config.bar.to_props();
        let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys[0], "position");
        assert_eq!(*keys.last().unwrap(), "shadow");
    }

    #[test]
    fn booleans_render_as_on_off() {
        let mut table = toml::Table::new();
        table.insert("shadow".into(), true.into());
        table.insert("sticky".into(), false.into());
        let props = table_to_props(&table);
        assert_eq!(props.get("shadow").unwrap(), &PropertyValue::from("on"));
        assert_eq!(props.get("sticky").unwrap(), &PropertyValue::from("off"));
    }

    #[test]
    fn nested_values_are_skipped() {
        let raw = r#"
            shadow = "on"
            [nested]
            a = 1
        "#;
        let table: toml::Table = toml::from_str(raw).unwrap();
        let props = table_to_props(&table);
        assert_eq!(props.len(), 1);
        assert!(props.get("nested").is_none());
    }

    #[test]
    fn default_item_settings_carry_fonts() {
        let config = SbarConfig::default();
        let props = table_to_props(&config.defaults);
        assert_eq!(
            props.get("label.font").unwrap(),
            &PropertyValue::from("FiraCode Nerd Font:Bold:12.0")
        );
        assert_eq!(
            props.get("background.height").unwrap(),
            &PropertyValue::Int(18)
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = crate::load("/nonexistent/sbar.toml").unwrap();
        assert_eq!(config.bar.height, 28);
        assert!(!config.defaults.is_empty());
    }
}
