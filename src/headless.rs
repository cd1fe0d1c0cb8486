//! Scripted runs without a terminal.
//!
//! Mounts a fresh counter, applies the actions in order and writes the
//! rendered view (or every rendered frame) to `out`.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::ui::counter::{CounterIntent, CounterView, ViewTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessOptions {
    pub format: OutputFormat,
    pub all_frames: bool,
}

/// Returns the final counter value.
pub fn run<W: Write>(
    actions: &[CounterIntent],
    options: HeadlessOptions,
    out: &mut W,
) -> Result<i64, AppError> {
    let frames: Rc<RefCell<Vec<ViewTree>>> = Rc::default();
    let sink = Rc::clone(&frames);
    let mut counter = CounterView::mount_with(move |view| sink.borrow_mut().push(view.clone()));

    for &action in actions {
        counter.dispatch(action);
    }
    tracing::info!(
        actions = actions.len(),
        value = counter.value(),
        "headless run finished"
    );

    let frames = frames.borrow();
    let selected: &[ViewTree] = if options.all_frames {
        &frames
    } else {
        std::slice::from_ref(counter.view())
    };
    write_frames(selected, options.format, out)?;
    Ok(counter.value())
}

fn write_frames<W: Write>(
    frames: &[ViewTree],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for (idx, frame) in frames.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                for line in frame.text_lines() {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        OutputFormat::Json => {
            // One JSON document per line.
            for frame in frames {
                serde_json::to_writer(&mut *out, frame)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(actions: &[CounterIntent], format: OutputFormat, all_frames: bool) -> String {
        let mut out = Vec::new();
        run(actions, HeadlessOptions { format, all_frames }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn no_actions_prints_initial_view() {
        let text = run_to_string(&[], OutputFormat::Text, false);
        assert_eq!(text, "Counter App\nCount: 0\n[ Increment ] [ Reset ]\n");
    }

    #[test]
    fn returns_final_value() {
        let mut out = Vec::new();
        let options = HeadlessOptions {
            format: OutputFormat::Text,
            all_frames: false,
        };
        let actions = [CounterIntent::Increment, CounterIntent::Increment];
        assert_eq!(run(&actions, options, &mut out).unwrap(), 2);
    }

    #[test]
    fn all_frames_includes_mount_frame() {
        let text = run_to_string(&[CounterIntent::Increment], OutputFormat::Text, true);
        let counts: Vec<&str> = text.lines().filter(|l| l.starts_with("Count:")).collect();
        assert_eq!(counts, vec!["Count: 0", "Count: 1"]);
    }

    #[test]
    fn json_frames_are_line_delimited() {
        let text = run_to_string(
            &[CounterIntent::Increment, CounterIntent::Reset],
            OutputFormat::Json,
            true,
        );
        let docs: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[1]["children"][1]["text"], "Count: 1");
        assert_eq!(docs[2]["children"][1]["text"], "Count: 0");
    }
}
