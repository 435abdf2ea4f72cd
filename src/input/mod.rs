//! Console input for ticket intake
//!
//! [`LineReader`] prompts and reads a single line; [`LineReader::read_validated`]
//! wraps that in an unbounded retry loop gated by a validator. The reader is
//! generic over its streams so the same code drives both the real console and
//! in-memory buffers in tests.

use crate::error::{IntakeError, Result};
use std::io::{self, BufRead, StdinLock, Write};

/// Console messages printed by the validated reader
#[derive(Debug, Clone)]
pub struct ReaderMessages {
    /// Printed after a value fails validation
    pub invalid_input: String,
    /// Printed when the input stream closes before a value arrives
    pub read_error: String,
}

impl Default for ReaderMessages {
    fn default() -> Self {
        Self {
            invalid_input: "Entrada inválida. Intente nuevamente.".to_string(),
            read_error: "Error leyendo entrada.".to_string(),
        }
    }
}

/// Prompting line reader
pub struct LineReader<R, W> {
    input: R,
    output: W,
    messages: ReaderMessages,
}

impl LineReader<StdinLock<'static>, Box<dyn Write>> {
    /// Reader bound to the process's standard input
    ///
    /// Prompts and retry messages go to stdout, or to stderr when
    /// `prompts_on_stderr` is set so stdout stays machine-readable.
    pub fn stdio(messages: ReaderMessages, prompts_on_stderr: bool) -> Self {
        let output: Box<dyn Write> = if prompts_on_stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        Self::new(io::stdin().lock(), output, messages)
    }
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    /// Create a reader over arbitrary streams
    pub const fn new(input: R, output: W, messages: ReaderMessages) -> Self {
        Self {
            input,
            output,
            messages,
        }
    }

    /// Print `prompt` and read one line
    ///
    /// The trailing line terminator (`\n` or `\r\n`) is stripped. Returns
    /// `Ok(None)` when the stream is already at end-of-stream; a final line
    /// without a terminator is still returned. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD, which no digit-only value can contain.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prompt until `validator` accepts the value
    ///
    /// There is no retry limit. The only way out without a valid value is the
    /// input stream closing, which yields [`IntakeError::InputStreamClosed`].
    pub fn read_validated<F>(&mut self, prompt: &str, field: &str, validator: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            let Some(line) = self.read_line(prompt)? else {
                writeln!(self.output, "{}", self.messages.read_error)?;
                tracing::debug!(field, attempts, "input stream closed");
                return Err(IntakeError::InputStreamClosed {
                    field: field.to_string(),
                });
            };

            if validator(&line) {
                tracing::debug!(field, attempts, "accepted input");
                return Ok(line);
            }

            tracing::debug!(field, attempts, "rejected input");
            writeln!(self.output, "{}", self.messages.invalid_input)?;
        }
    }

    /// Consume the reader and hand back its output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
