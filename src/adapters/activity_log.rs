use crate::core::{ActivityLog, Clock};
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `[YYYY-MM-DD HH:MM:SS] message`
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", at.format(TIMESTAMP_FORMAT), message)
}

/// Shows each entry to the operator and appends it to a log file.
pub struct FileActivityLog<W: Write> {
    path: PathBuf,
    display: W,
    clock: Box<dyn Clock>,
}

impl FileActivityLog<std::io::Stdout> {
    pub fn new<P: AsRef<Path>>(path: P, clock: Box<dyn Clock>) -> Self {
        Self::with_display(path, std::io::stdout(), clock)
    }
}

impl<W: Write> FileActivityLog<W> {
    pub fn with_display<P: AsRef<Path>>(path: P, display: W, clock: Box<dyn Clock>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            display,
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }
}

impl<W: Write> ActivityLog for FileActivityLog<W> {
    fn record(&mut self, message: &str) {
        let entry = format_entry(self.clock.now(), message);

        if let Err(e) = writeln!(self.display, "{}", entry) {
            tracing::warn!("Could not display log entry: {}", e);
        }
        if let Err(e) = self.append(&entry) {
            tracing::warn!("Could not append to {}: {}", self.path.display(), e);
        }
    }
}

/// Keeps messages in memory, without timestamps.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    messages: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl ActivityLog for MemoryLog {
    fn record(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry(morning(), "Rex fed."), "[2026-10-19 07:05:09] Rex fed.");
    }

    #[test]
    fn test_file_log_appends_and_displays() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pet_log.txt");
        let clock = Box::new(FixedClock(morning()));
        let mut log = FileActivityLog::with_display(&path, Vec::new(), clock);

        log.record("Rex fed.");
        log.record("Rex played.");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[2026-10-19 07:05:09] Rex fed.\n[2026-10-19 07:05:09] Rex played.\n"
        );

        let shown = String::from_utf8(log.display.clone()).unwrap();
        assert_eq!(shown, content);
    }

    #[test]
    fn test_unwritable_log_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        // a directory cannot be opened for appending
        let clock = Box::new(FixedClock(morning()));
        let mut log = FileActivityLog::with_display(temp_dir.path(), Vec::new(), clock);

        log.record("still fine");

        assert_eq!(
            String::from_utf8(log.display).unwrap(),
            "[2026-10-19 07:05:09] still fine\n"
        );
    }

    #[test]
    fn test_memory_log() {
        let mut log = MemoryLog::new();
        log.record("Rex found a toy!");
        assert!(log.contains("toy"));
        assert_eq!(log.messages(), ["Rex found a toy!"]);
    }
}
