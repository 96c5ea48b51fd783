//! Session Logger
//!
//! Append-only JSONL log with one [`SessionRecord`] per line.

use legislature_events::SessionRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Writes session records to a JSONL file
pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl SessionLogger {
    /// Create a new logger writing to the specified path, truncating it
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Create a logger that discards records
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    /// Number of records logged so far
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Append a record
    pub fn log(&mut self, record: &SessionRecord) -> std::io::Result<()> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for SessionLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("Failed to flush session log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legislature_events::{LegislatorRef, Outcome, Point, Vote, VoteTally};
    use std::io::BufRead;

    fn record(session: u64, outcome: Outcome) -> SessionRecord {
        SessionRecord {
            session,
            advocate: LegislatorRef::new(0, "Legislator Ona Tib"),
            bill_name: "Green Transit Bill".to_string(),
            bill_position: Point::new(1.0, -1.0),
            votes: vec![Vote::Aye, Vote::Nay],
            tally: VoteTally { aye: 2, nay: 1, abstain: 0 },
            outcome,
        }
    }

    #[test]
    fn test_session_logging() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.jsonl");

        let mut logger = SessionLogger::new(&path).unwrap();
        logger.log(&record(1, Outcome::Passed)).unwrap();
        logger.log(&record(2, Outcome::Failed)).unwrap();
        logger.flush().unwrap();

        let file = File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        let parsed: SessionRecord = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(parsed.session, 2);
        assert_eq!(parsed.outcome, Outcome::Failed);
    }

    #[test]
    fn test_null_logger() {
        let mut logger = SessionLogger::null();
        logger.log(&record(1, Outcome::Passed)).unwrap();
        assert_eq!(logger.record_count(), 1);
    }
}
