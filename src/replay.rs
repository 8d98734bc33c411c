//! Drive a tracker session from recorded observer events, one JSON object
//! per line:
//!
//! ```text
//! {"type":"visibility","section":3,"ratio":0.25}
//! {"type":"click","inside":false}
//! ```

use std::io::BufRead;

use serde::Deserialize;

use crate::error::{Result, TocError};
use crate::format;
use crate::tracker::{TocView, TrackerSession, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Visibility { section: usize, ratio: f64 },
    Click { inside: bool },
}

/// Parse one non-blank line. `line_no` is 1-indexed, for error messages.
pub fn parse_event(line: &str, line_no: usize) -> Result<Event> {
    serde_json::from_str(line).map_err(|e| TocError::InvalidEvent {
        line: line_no,
        reason: e.to_string(),
    })
}

/// Apply every event from `input` in order and return one trace line per
/// event. Stops at the first malformed line or unknown section.
pub fn run(
    session: &mut TrackerSession,
    view: &mut impl TocView,
    input: impl BufRead,
) -> Result<Vec<String>> {
    let mut trace = Vec::new();
    let mut n = 0;

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| TocError::InvalidEvent {
            line: line_no,
            reason: e.to_string(),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = match parse_event(line, line_no)? {
            Event::Visibility { section, ratio } => {
                if section >= session.sections().len() {
                    return Err(TocError::InvalidEvent {
                        line: line_no,
                        reason: format!(
                            "no section {section} (document has {})",
                            session.sections().len()
                        ),
                    });
                }
                let v: Visibility = session.on_visibility(section, ratio, view);
                format::visibility(section, v)
            }
            Event::Click { inside } => {
                session.on_click(inside, view);
                let label = if inside { "click in" } else { "click out" };
                label.to_string()
            }
        };

        n += 1;
        trace.push(format::trace_line(
            n,
            &outcome,
            session.current().map(|e| e.text.as_str()),
        ));
    }

    Ok(trace)
}
