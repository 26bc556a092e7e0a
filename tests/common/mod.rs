//! Shared utilities for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tierlog::{configure, ConfigOptions, Logger, RequestInfo};

/// A logger writing into a fresh scratch directory.
pub struct Scratch {
    pub dir: TempDir,
    pub logger: Logger,
}

impl Scratch {
    pub fn new(options: ConfigOptions) -> Self {
        Self::with_request(options, RequestInfo::cli())
    }

    pub fn with_request(options: ConfigOptions, request: RequestInfo) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let options = options.log_dir(dir.path().to_string_lossy().into_owned());
        let logger = Logger::new(configure(options), request);
        Self { dir, logger }
    }

    /// Lines of `name` inside the scratch directory; empty if absent.
    pub fn lines(&self, name: &str) -> Vec<String> {
        read_lines(&self.dir.path().join(name))
    }

    /// Names of all files written so far, sorted.
    #[allow(dead_code)]
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Space-separated fields of a rendered line. The bracketed timestamp spans
/// the first two.
#[allow(dead_code)]
pub fn fields(line: &str) -> Vec<&str> {
    line.splitn(13, ' ').collect()
}
