//! Console-backed collaborators.
//!
//! The command source prompts on one stream and reads tokens from another;
//! the reporter writes report lines, either human-readable or as JSON. Both
//! are generic over their streams so tests can run them against buffers.

use super::error::CommandError;
use super::{CommandSource, Reporter};
use crate::core::StateRecord;
use crate::report::{render_history, StatusReport};
use serde_json::json;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::warn;

const PROMPT: &str = "Commands: 1=Status 2=Move 3=Shoot 4=Calc 5=Stop > ";

/// Blocking command source reading integer tokens line by line.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use turret::io::{CommandSource, ConsoleCommandSource};
///
/// let input = Cursor::new("2\n");
/// let mut source = ConsoleCommandSource::new(input, Vec::<u8>::new());
/// assert_eq!(source.read_command().unwrap(), 2);
/// ```
pub struct ConsoleCommandSource<R, W> {
    input: R,
    prompt_out: W,
}

impl ConsoleCommandSource<BufReader<Stdin>, Stdout> {
    /// Command source attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleCommandSource<R, W> {
    /// Command source over arbitrary streams.
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> CommandSource for ConsoleCommandSource<R, W> {
    fn read_command(&mut self) -> Result<i64, CommandError> {
        self.prompt_out.write_all(PROMPT.as_bytes())?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(CommandError::Closed);
        }

        let token = line.trim();
        token
            .parse::<i64>()
            .map_err(|_| CommandError::Malformed(token.to_string()))
    }
}

/// Reporter writing one line per report to any [`Write`] stream.
///
/// In JSON mode each line is a single JSON object; otherwise the default
/// text renderings from [`crate::report`] are used. Write failures are
/// logged and swallowed: reporting is observability, never control flow.
pub struct ConsoleReporter<W> {
    out: W,
    json: bool,
}

impl ConsoleReporter<Stdout> {
    /// Text reporter attached to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), false)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter over an arbitrary stream, optionally in JSON mode.
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    fn emit(&mut self, line: &str) {
        if let Err(error) = writeln!(self.out, "{line}") {
            warn!(%error, "dropped report line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn status(&mut self, report: &StatusReport) {
        if self.json {
            match serde_json::to_string(report) {
                Ok(line) => self.emit(&line),
                Err(error) => warn!(%error, "failed to encode status report"),
            }
        } else {
            self.emit(&report.to_string());
        }
    }

    fn history(&mut self, records: &[StateRecord]) {
        if self.json {
            match serde_json::to_string(&json!({ "history": records })) {
                Ok(line) => self.emit(&line),
                Err(error) => warn!(%error, "failed to encode history report"),
            }
        } else {
            self.emit(&render_history(records));
        }
    }

    fn note(&mut self, message: &str) {
        if self.json {
            match serde_json::to_string(&json!({ "note": message })) {
                Ok(line) => self.emit(&line),
                Err(error) => warn!(%error, "failed to encode note"),
            }
        } else {
            self.emit(message);
        }
    }
}
