//! Test fixtures and builders.

use dialplan::{CallingCodeTable, PrefixTable};
use std::fs;
use std::io;
use std::path::Path;

/// Directory used by most scenarios: GB/US/FR plus a country with a
/// multi-digit trunk prefix (CHN, "072").
pub fn sample_directory() -> (CallingCodeTable, PrefixTable) {
    let mut calling_codes = CallingCodeTable::new();
    calling_codes.insert("GB", 44);
    calling_codes.insert("US", 1);
    calling_codes.insert("FR", 33);
    calling_codes.insert("CHN", 86);

    let mut prefixes = PrefixTable::new();
    prefixes.insert("GB", "0");
    prefixes.insert("US", "1");
    prefixes.insert("FR", "0");
    prefixes.insert("CHN", "072");

    (calling_codes, prefixes)
}

/// Builder for on-disk directory files consumed by the CLI.
#[derive(Debug, Default)]
pub struct DirectoryFileBuilder {
    lines: Vec<String>,
}

impl DirectoryFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, text: &str) -> Self {
        self.lines.push(format!("# {}", text));
        self
    }

    pub fn with_entry(mut self, country: &str, code: u32, prefix: &str) -> Self {
        self.lines.push(format!("{} {} {}", country, code, prefix));
        self
    }

    /// Appends a line verbatim, for malformed-input tests.
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self, path: &Path) -> io::Result<()> {
        fs::write(path, self.lines.join("\n") + "\n")
    }
}
