use sbar_core::state::{BarState, ItemState};
use sbar_core::{Result, SbarError};

/// Parse captured query stdout into a JSON value.
///
/// Trailing newlines are stripped first.  Anything that is not valid JSON —
/// typically sketchybar printing an error string instead of a record — is a
/// hard [`SbarError::Parse`] failure; it is never swallowed.
pub fn parse_json(raw: &str) -> Result<serde_json::Value> {
    let trimmed = raw.trim_end_matches('\n');
    serde_json::from_str(trimmed)
        .map_err(|e| SbarError::Parse(format!("query output is not JSON: {e}")))
}

/// Deserialize `--query bar` output into a [`BarState`].
pub fn parse_bar(raw: &str) -> Result<BarState> {
    let value = parse_json(raw)?;
    serde_json::from_value(value).map_err(|e| SbarError::Validation(format!("bar record: {e}")))
}

/// Deserialize `--query <item>` output into an [`ItemState`].
pub fn parse_item(raw: &str) -> Result<ItemState> {
    let value = parse_json(raw)?;
    serde_json::from_value(value).map_err(|e| SbarError::Validation(format!("item record: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbar_core::state::{BarPosition, Hidden, OnOff, Topmost};

    const BAR_JSON: &str = r#"{
        "color": "0xdd222222",
        "border_color": "0xff000000",
        "position": "top",
        "height": 28,
        "blur_radius": 20,
        "corner_radius": 9,
        "margin": 3,
        "y_offset": 3,
        "padding_left": 4,
        "padding_right": 4,
        "hidden": "off",
        "topmost": "window",
        "sticky": "on",
        "font_smoothing": "off",
        "shadow": "off",
        "show_in_fullscreen": "off",
        "drawing": "on",
        "items": ["battery", "clock"]
    }"#;

    #[test]
    fn parse_bar_record() {
        let bar = parse_bar(BAR_JSON).unwrap();
        assert_eq!(bar.position, BarPosition::Top);
        assert_eq!(bar.height, 28);
        assert_eq!(bar.hidden, Hidden::Off);
        assert_eq!(bar.topmost, Topmost::Window);
        assert_eq!(bar.sticky, OnOff::On);
        assert_eq!(
            bar.items.as_deref(),
            Some(&["battery".to_string(), "clock".to_string()][..])
        );
    }

    #[test]
    fn missing_defaults_fall_back() {
        let raw = r#"{
            "color": "0xdd222222", "border_color": "0xff000000",
            "hidden": "off", "topmost": "off", "sticky": "off",
            "font_smoothing": "off", "shadow": "off",
            "show_in_fullscreen": "off", "drawing": "on"
        }"#;
        let bar = parse_bar(raw).unwrap();
        assert_eq!(bar.height, 25);
        assert_eq!(bar.notch_width, 200);
        assert!(bar.items.is_none());
    }

    #[test]
    fn bar_record_round_trips() {
        let bar = parse_bar(BAR_JSON).unwrap();
        let reparsed = parse_bar(&serde_json::to_string(&bar).unwrap()).unwrap();
        assert_eq!(bar, reparsed);
    }

    #[test]
    fn trailing_newline_is_stripped() {
        let raw = format!("{BAR_JSON}\n");
        assert!(parse_bar(&raw).is_ok());
    }

    #[test]
    fn non_json_output_is_a_parse_error() {
        let err = parse_bar("could not find item 'bar'").unwrap_err();
        assert!(matches!(err, SbarError::Parse(_)));
    }

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let err = parse_bar(r#"{"color": "0xdd222222"}"#).unwrap_err();
        assert!(matches!(err, SbarError::Validation(_)));
    }

    #[test]
    fn parse_item_keeps_unknown_properties() {
        let raw = r#"{
            "name": "battery",
            "drawing": "on",
            "icon": {"value": "!", "drawing": "on"},
            "label": {"value": "87%", "drawing": "on"},
            "update_freq": 120
        }"#;
        let item = parse_item(raw).unwrap();
        assert_eq!(item.name, "battery");
        assert_eq!(item.label.value, "87%");
        assert_eq!(item.extra["update_freq"], 120);
    }
}
