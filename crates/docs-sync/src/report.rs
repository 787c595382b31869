use crate::feedback::Feedback;

/// Detail for one file that failed to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file_name: String,
    pub message: String,
}

/// How a completed run is classified. Derived from the report, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// At least one download and nothing failed.
    Success,
    /// Nothing failed, but nothing was downloaded either.
    NoChanges,
    /// One or more files failed.
    HasErrors,
}

/// Tally of one sync run.
///
/// Created when the run starts, mutated only by that run, and returned once
/// the run completes. `downloaded + skipped + errors()` always equals the
/// number of filtered entries processed.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub downloaded: u64,
    pub skipped: u64,
    pub failures: Vec<FileFailure>,
    /// Ordered presentation messages for the caller to print.
    pub feedback: Vec<Feedback>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_download(&mut self) {
        self.downloaded += 1;
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failure(&mut self, file_name: impl Into<String>, message: impl Into<String>) {
        self.failures.push(FileFailure {
            file_name: file_name.into(),
            message: message.into(),
        });
    }

    pub fn errors(&self) -> u64 {
        self.failures.len() as u64
    }

    pub fn total_processed(&self) -> u64 {
        self.downloaded + self.skipped + self.errors()
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn outcome(&self) -> SyncOutcome {
        if self.has_errors() {
            SyncOutcome::HasErrors
        } else if self.downloaded > 0 {
            SyncOutcome::Success
        } else {
            SyncOutcome::NoChanges
        }
    }
}
