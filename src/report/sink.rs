// Wed Feb 11 2026 - Alex

use crate::report::PersistenceError;
use indexmap::IndexSet;
use serde::Serialize;
use std::fs;
use std::path::Path;

// Owns the counters and the unresolved-line set for one rewrite pass.
// Resolution misses are data, not errors; only the writes can fail.
pub struct ReportSink {
    strings_replaced: usize,
    lines_edited: usize,
    unresolved: IndexSet<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub strings_replaced: usize,
    pub lines_edited: usize,
    pub unresolved_entries: usize,
}

impl ReportSink {
    pub fn new() -> Self {
        Self {
            strings_replaced: 0,
            lines_edited: 0,
            unresolved: IndexSet::new(),
        }
    }

    pub fn reset(&mut self) {
        self.strings_replaced = 0;
        self.lines_edited = 0;
        self.unresolved.clear();
    }

    pub fn record_substitution(&mut self) {
        self.strings_replaced += 1;
    }

    pub fn record_edited_line(&mut self) {
        self.lines_edited += 1;
    }

    // Deduplicated by exact content, first-seen order preserved.
    pub fn record_unresolved(&mut self, original_line: &str) {
        if !self.unresolved.contains(original_line) {
            self.unresolved.insert(original_line.to_string());
        }
    }

    pub fn strings_replaced(&self) -> usize {
        self.strings_replaced
    }

    pub fn lines_edited(&self) -> usize {
        self.lines_edited
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    pub fn unresolved_lines(&self) -> impl Iterator<Item = &str> {
        self.unresolved.iter().map(String::as_str)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            strings_replaced: self.strings_replaced,
            lines_edited: self.lines_edited,
            unresolved_entries: self.unresolved.len(),
        }
    }

    pub fn save(&self, lines: &[String], destination: &Path) -> Result<(), PersistenceError> {
        write_lines(lines.iter().map(String::as_str), destination)
    }

    pub fn save_unresolved_log(&self, destination: &Path) -> Result<(), PersistenceError> {
        write_lines(self.unresolved_lines(), destination)
    }
}

impl Default for ReportSink {
    fn default() -> Self {
        Self::new()
    }
}

fn write_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
    destination: &Path,
) -> Result<(), PersistenceError> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }

    fs::write(destination, text).map_err(|source| PersistenceError::Write {
        path: destination.to_path_buf(),
        source,
    })
}
