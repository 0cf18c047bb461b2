//! Outcome records for pruning runs

/// What happened to one package during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub package: String,
    /// The registry has no package with this name
    pub not_found: bool,
    /// Versions deleted, or that would have been deleted in dry-run mode
    pub deleted: Vec<u64>,
    /// Candidates kept because of their tags
    pub protected: Vec<u64>,
    /// Candidates the registry refused to delete
    pub failed: Vec<u64>,
}

impl PruneReport {
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
            ..Default::default()
        }
    }

    pub fn not_found(package: &str) -> Self {
        Self {
            not_found: true,
            ..Self::new(package)
        }
    }

    /// Returns true if no version of the package was touched
    pub fn is_untouched(&self) -> bool {
        self.deleted.is_empty() && self.protected.is_empty() && self.failed.is_empty()
    }
}

/// Totals across every package in a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub packages: usize,
    pub not_found: usize,
    pub deleted: usize,
    pub protected: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &PruneReport) {
        self.packages += 1;
        if report.not_found {
            self.not_found += 1;
        }
        self.deleted += report.deleted.len();
        self.protected += report.protected.len();
        self.failed += report.failed.len();
    }
}
