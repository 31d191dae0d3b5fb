//! Soft-anomaly reporting for the generation pipeline.
//!
//! Extraction, normalization, and emission never abort on a bad annotation:
//! the offending field, condition, or handler is dropped and the anomaly is
//! recorded here. The collector is threaded mutably through the pipeline and
//! printed as a summary once generation finishes.

use tracing::warn;

/// A single recorded anomaly: where it happened, a short machine-readable
/// kind, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of anomalies for one generation run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    issues: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one anomaly and mirrors it to the log.
    pub fn record(
        &mut self,
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) {
        let issue = Diagnostic::new(location, kind, message);
        warn!(
            location = %issue.location,
            kind = %issue.kind,
            "{}",
            issue.message
        );
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Prints every recorded anomaly to stderr. Intended for the CLI surface
    /// after the output file has been written.
    pub fn print_summary(&self) {
        if self.issues.is_empty() {
            return;
        }
        eprintln!("\n⚠️ Generation finished with {} issue(s):\n", self.issues.len());
        for issue in &self.issues {
            eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
        }
        eprintln!();
    }
}
