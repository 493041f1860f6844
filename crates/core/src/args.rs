use std::fmt;

/// A scalar value on the right-hand side of a `key=value` property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// An ordered batch of `key=value` settings for an item or the bar.
///
/// Order matters: sketchybar applies settings in the order given, and a later
/// key overrides an earlier one in its own state.  `set` therefore replaces an
/// existing key in place (keeping its original position) instead of appending
/// a duplicate, so a batch is applied exactly as it reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(Vec<(String, PropertyValue)>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert: replaces the value if `key` is already present.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// In-place insert with the same replace-or-append semantics as [`set`](Self::set).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Merge `other` into `self`, entry by entry, in `other`'s order.
    pub fn extend(&mut self, other: &Self) {
        for (k, v) in &other.0 {
            self.insert(k.clone(), v.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, PropertyValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// One argument to a sketchybar invocation: a single token, a nested list of
/// further arguments, or a property batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Token(String),
    List(Vec<Arg>),
    Props(Props),
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Token(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Token(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Token(n.to_string())
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Self::Token(n.to_string())
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Self::Token(x.to_string())
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(list: Vec<Arg>) -> Self {
        Self::List(list)
    }
}

impl From<Props> for Arg {
    fn from(props: Props) -> Self {
        Self::Props(props)
    }
}

impl Arg {
    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            // A token is one argument, never split further.
            Self::Token(s) => out.push(s.clone()),
            Self::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            // A property batch contributes one "key=value" token per entry,
            // in insertion order; it is never recursed into positionally.
            Self::Props(props) => {
                for (k, v) in props.iter() {
                    out.push(format!("{k}={v}"));
                }
            }
        }
    }
}

/// Flatten a sequence of arguments into the token list handed to the process.
///
/// Lists recurse depth-first preserving order; an empty input yields an empty
/// vector.
#[must_use]
pub fn flatten(args: &[Arg]) -> Vec<String> {
    let mut out = Vec::new();
    for arg in args {
        arg.flatten_into(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_string_is_one_token() {
        assert_eq!(flatten(&["hello".into()]), vec!["hello"]);
    }

    #[test]
    fn flatten_nested_list() {
        let args = [Arg::List(vec![
            "x".into(),
            Arg::List(vec!["y".into(), "z".into()]),
        ])];
        assert_eq!(flatten(&args), vec!["x", "y", "z"]);
    }

    #[test]
    fn flatten_props_in_insertion_order() {
        let props = Props::new().set("a", 1i64).set("b", 2i64);
        assert_eq!(flatten(&[props.into()]), vec!["a=1", "b=2"]);
    }

    #[test]
    fn flatten_props_nested_in_list() {
        let args = [Arg::List(vec![
            "--set".into(),
            "battery".into(),
            Props::new().set("label", "100%").into(),
        ])];
        assert_eq!(flatten(&args), vec!["--set", "battery", "label=100%"]);
    }

    #[test]
    fn flatten_empty_is_empty() {
        assert_eq!(flatten(&[]), Vec::<String>::new());
    }

    #[test]
    fn flatten_is_associative_over_concatenation() {
        let a = Arg::List(vec!["x".into(), Props::new().set("k", "v").into()]);
        let b = Arg::List(vec![Arg::List(vec!["y".into()]), "z".into()]);

        let joined = flatten(&[a.clone(), b.clone()]);
        let mut split = flatten(&[a]);
        split.extend(flatten(&[b]));
        assert_eq!(joined, split);
    }

    #[test]
    fn props_set_replaces_in_place() {
        let props = Props::new()
            .set("icon", "+")
            .set("label", "cpu")
            .set("icon", "!");
        let tokens: Vec<String> = props.iter().map(|(k, v)| format!("{k}={v}")).collect();
        assert_eq!(tokens, vec!["icon=!", "label=cpu"]);
    }

    #[test]
    fn property_value_display() {
        assert_eq!(PropertyValue::from("0xffffffff").to_string(), "0xffffffff");
        assert_eq!(PropertyValue::from(28u32).to_string(), "28");
        assert_eq!(PropertyValue::from(0.5).to_string(), "0.5");
    }
}
