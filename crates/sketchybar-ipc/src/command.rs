use sbar_core::args::{flatten, Arg};

/// Name of the external status-bar binary every command is addressed to.
pub const EXECUTABLE: &str = "sketchybar";

/// Flatten `args` and prefix the fixed executable token.
///
/// The result is the exact argv handed to the process, one flag or
/// `key=value` setting per element.
#[must_use]
pub fn command_tokens(args: &[Arg]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(args.len() + 1);
    tokens.push(EXECUTABLE.to_string());
    tokens.extend(flatten(args));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbar_core::args::Props;

    #[test]
    fn set_command_tokens() {
        let tokens = command_tokens(&[
            "--set".into(),
            "battery".into(),
            Props::new().set("label", "100%").into(),
        ]);
        assert_eq!(tokens, vec!["sketchybar", "--set", "battery", "label=100%"]);
    }

    #[test]
    fn no_args_yields_just_the_executable() {
        assert_eq!(command_tokens(&[]), vec!["sketchybar"]);
    }

    #[test]
    fn nested_lists_flatten_in_order() {
        let tokens = command_tokens(&[
            "--add".into(),
            Arg::List(vec!["item".into(), "cpu".into(), "right".into()]),
        ]);
        assert_eq!(tokens, vec!["sketchybar", "--add", "item", "cpu", "right"]);
    }
}
