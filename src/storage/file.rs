use crate::core::Ticket;
use crate::error::{IntakeError, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory for ticket records, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "assets";

/// Writes ticket records as timestamped text files
///
/// Files are named `ticket_YYYYMMDDHHMMSS.txt` after the local time of the
/// write, which is unrelated to the timestamp inside the reference. Two
/// writes within the same second target the same file and the later one
/// wins. The output directory is never created here.
#[derive(Debug, Clone)]
pub struct TicketWriter {
    output_dir: PathBuf,
}

impl TicketWriter {
    /// Create a writer targeting `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path a record written at `now` would land on
    pub fn record_path<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        self.output_dir
            .join(format!("ticket_{}.txt", now.format("%Y%m%d%H%M%S")))
    }

    /// Write `ticket` to a file named after the current local time
    pub fn write(&self, ticket: &Ticket) -> Result<PathBuf> {
        self.write_at(ticket, &Local::now())
    }

    /// Write `ticket` to the file for `now`, creating or truncating it
    ///
    /// If the body cannot be written after the file was opened, the file is
    /// removed so no partial record remains.
    pub fn write_at<Tz: TimeZone>(&self, ticket: &Ticket, now: &DateTime<Tz>) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = self.record_path(now);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| {
                tracing::warn!(path = %path.display(), error = %source, "cannot open record file");
                IntakeError::FileWrite {
                    path: path.clone(),
                    source,
                }
            })?;

        let written = file
            .write_all(ticket.to_record().as_bytes())
            .and_then(|()| file.sync_all());
        discard_on_error(written, file, &path)?;

        tracing::info!(
            path = %path.display(),
            reference = %ticket.reference(),
            "ticket record written"
        );
        Ok(path)
    }
}

/// Remove the record at `path` if writing its body failed
///
/// `out` is the open handle to `path`; it is closed before the removal.
fn discard_on_error<W>(written: std::io::Result<()>, out: W, path: &Path) -> Result<()> {
    let Err(source) = written else {
        return Ok(());
    };
    drop(out);
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "cannot remove partial record");
    }
    Err(IntakeError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

impl Default for TicketWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
