//! Append-only audit trail of mutating operations
//!
//! Each entry is one line: `<RFC 3339 timestamp> - <message>`. The audit
//! file is independent of the data file and appending to it is best-effort:
//! a failed append is reported to the caller but never undoes the mutation
//! that was already saved.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat};

use crate::Result;

const SEPARATOR: &str = " - ";

/// Timestamp layout used by log files written before entries switched to RFC 3339.
const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for audit messages.
pub trait AuditSink {
    fn append(&self, message: &str) -> Result<()>;
}

impl<A: AuditSink + ?Sized> AuditSink for &A {
    fn append(&self, message: &str) -> Result<()> {
        (**self).append(message)
    }
}

/// File-backed audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry back in the order it was written.
    ///
    /// A log that does not exist yet has no entries.
    pub fn entries(&self) -> Result<Vec<AuditEntry>> {
        let Some(content) = roster_fs::read_text_optional(&self.path)? else {
            return Ok(Vec::new());
        };
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(AuditEntry::parse)
            .collect())
    }
}

impl AuditSink for AuditLog {
    fn append(&self, message: &str) -> Result<()> {
        let entry = AuditEntry::now(message);
        roster_fs::append_line(&self.path, &entry.to_string())?;
        Ok(())
    }
}

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Timestamp exactly as written in the log.
    pub recorded_at: String,
    pub message: String,
}

impl AuditEntry {
    /// Stamp `message` with the current local time. Line breaks in the
    /// message become spaces so the entry stays on one line.
    pub fn now(message: &str) -> Self {
        Self {
            recorded_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            message: message.replace(['\r', '\n'], " "),
        }
    }

    /// Split a log line at its first separator. Lines without one are kept
    /// whole as the message.
    pub fn parse(line: &str) -> Self {
        match line.split_once(SEPARATOR) {
            Some((recorded_at, message)) => Self {
                recorded_at: recorded_at.to_string(),
                message: message.to_string(),
            },
            None => Self {
                recorded_at: String::new(),
                message: line.to_string(),
            },
        }
    }

    /// Parsed timestamp. Legacy entries without an offset are read as UTC.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.recorded_at)
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&self.recorded_at, LEGACY_TIMESTAMP_FORMAT)
                    .ok()
                    .map(|naive| naive.and_utc().fixed_offset())
            })
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.recorded_at, SEPARATOR, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn append_writes_timestamped_lines() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));

        log.append("created: Roboute Guilliman").unwrap();
        log.append("deleted: Roboute Guilliman").unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - created: Roboute Guilliman"));

        let entries = log.entries().unwrap();
        assert_eq!(entries[1].message, "deleted: Roboute Guilliman");
        assert!(entries[0].timestamp().is_some(), "timestamp must be ISO-8601");
    }

    #[test]
    fn append_after_unterminated_legacy_line_keeps_entries_apart() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("log.txt"));
        std::fs::write(log.path(), "2025-11-09 18:30:00 - Personaje creado: A").unwrap();

        log.append("created: B").unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Personaje creado: A");
        assert_eq!(entries[1].message, "created: B");
    }

    #[test]
    fn missing_log_has_no_entries() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("absent.txt"));
        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn multiline_messages_stay_on_one_line() {
        let entry = AuditEntry::now("updated: line one\nline two");
        assert_eq!(entry.message, "updated: line one line two");
        assert!(!entry.to_string().contains('\n'));
    }

    #[test]
    fn parses_legacy_timestamp_format() {
        let entry = AuditEntry::parse("2025-11-09 18:30:00 - Personaje creado: Abaddon");
        assert_eq!(entry.recorded_at, "2025-11-09 18:30:00");
        assert_eq!(entry.message, "Personaje creado: Abaddon");
        let ts = entry.timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-11-09T18:30:00+00:00");
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let entry = AuditEntry::parse("2026-01-02T03:04:05+01:00 - deleted: X - Y");
        assert_eq!(entry.message, "deleted: X - Y");
        assert_eq!(
            entry.timestamp().unwrap().to_rfc3339(),
            "2026-01-02T03:04:05+01:00"
        );
    }

    #[test]
    fn line_without_separator_is_kept_whole() {
        let entry = AuditEntry::parse("garbage");
        assert_eq!(entry.recorded_at, "");
        assert_eq!(entry.message, "garbage");
        assert_eq!(entry.timestamp(), None);
    }
}
