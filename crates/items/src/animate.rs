use sbar_core::args::Props;
use sbar_core::Result;
use sbar_ipc::{Client, Curve};
use tracing::error;

/// A two-phase animation with a guaranteed restore.
///
/// [`begin`](Self::begin) issues the "before" transition immediately; the
/// "after" transition runs on every exit path — explicitly via
/// [`finish`](Self::finish), or from `Drop` when the guard goes out of scope
/// early (including unwinding).  Callers that care about the restore
/// command's result should call `finish`; the `Drop` fallback can only log.
pub struct Animation<'a> {
    client: &'a Client,
    name: String,
    curve: Curve,
    duration: u32,
    restore: Option<Props>,
}

impl<'a> Animation<'a> {
    /// Start the transition: animate `before` now, remember `after` for exit.
    pub fn begin(
        client: &'a Client,
        name: impl Into<String>,
        curve: Curve,
        duration: u32,
        before: &Props,
        after: Props,
    ) -> Result<Self> {
        let name = name.into();
        client.animate(&name, curve, duration, before)?;
        Ok(Self {
            client,
            name,
            curve,
            duration,
            restore: Some(after),
        })
    }

    /// Run the restore transition now and surface its error.
    pub fn finish(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if let Some(props) = self.restore.take() {
            self.client
                .animate(&self.name, self.curve, self.duration, &props)?;
        }
        Ok(())
    }
}

impl Drop for Animation<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(item = %self.name, "restore animation failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbar_ipc::{Invoker, Outcome};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        shell_lines: Rc<RefCell<Vec<String>>>,
    }

    impl Invoker for Recorder {
        fn invoke(&self, _tokens: &[String]) -> Result<Outcome> {
            Ok(Outcome {
                code: Some(0),
                ..Outcome::default()
            })
        }

        fn shell(&self, line: &str) -> Result<Outcome> {
            self.shell_lines.borrow_mut().push(line.to_string());
            Ok(Outcome {
                code: Some(0),
                ..Outcome::default()
            })
        }
    }

    fn recording_client() -> (Client, Rc<RefCell<Vec<String>>>) {
        let recorder = Recorder::default();
        let lines = Rc::clone(&recorder.shell_lines);
        (Client::with_invoker(Box::new(recorder)), lines)
    }

    #[test]
    fn restore_runs_on_drop() {
        let (client, lines) = recording_client();
        {
            let _guard = Animation::begin(
                &client,
                "clock",
                Curve::Linear,
                0,
                &Props::new().set("label.color.alpha", 0.0),
                Props::new().set("label.color.alpha", 1.0),
            )
            .unwrap();
            assert_eq!(lines.borrow().len(), 1);
        }
        let lines = lines.borrow();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "sketchybar --animate linear 0 --set clock 'label.color.alpha=0'"
        );
        assert_eq!(
            lines[1],
            "sketchybar --animate linear 0 --set clock 'label.color.alpha=1'"
        );
    }

    #[test]
    fn finish_does_not_double_restore() {
        let (client, lines) = recording_client();
        let guard = Animation::begin(
            &client,
            "clock",
            Curve::Sin,
            0,
            &Props::new().set("icon.drawing", "off"),
            Props::new().set("icon.drawing", "on"),
        )
        .unwrap();
        guard.finish().unwrap();
        assert_eq!(lines.borrow().len(), 2);
    }

    #[test]
    fn restore_runs_on_early_return() {
        fn bail_early(client: &Client) -> Result<()> {
            let _guard = Animation::begin(
                client,
                "clock",
                Curve::Linear,
                0,
                &Props::new().set("drawing", "off"),
                Props::new().set("drawing", "on"),
            )?;
            Err(sbar_core::SbarError::Parse("simulated".into()))
        }

        let (client, lines) = recording_client();
        assert!(bail_early(&client).is_err());
        assert_eq!(lines.borrow().len(), 2);
    }
}
