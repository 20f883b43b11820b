//! Rule observers.
//!
//! Observers receive the decision points a rule takes so that callers can
//! collect coverage or statistics without the rule doing any I/O itself.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// A decision point taken while applying the required rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// The property is required; the documentation note was added.
    Required,

    /// A required field received `@NotNull`.
    NotNullAnnotated,

    /// A required field received `@Nonnull`.
    NonnullAnnotated,

    /// The property is not required.
    NotRequired,

    /// A non-required field received `@Nullable`.
    NullableAnnotated,
}

impl Branch {
    /// Every branch, in report order.
    pub const ALL: [Branch; 5] = [
        Branch::Required,
        Branch::NotNullAnnotated,
        Branch::NonnullAnnotated,
        Branch::NotRequired,
        Branch::NullableAnnotated,
    ];

    /// Stable label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Required => "required",
            Branch::NotNullAnnotated => "not_null_annotated",
            Branch::NonnullAnnotated => "nonnull_annotated",
            Branch::NotRequired => "not_required",
            Branch::NullableAnnotated => "nullable_annotated",
        }
    }

    fn index(self) -> usize {
        match self {
            Branch::Required => 0,
            Branch::NotNullAnnotated => 1,
            Branch::NonnullAnnotated => 2,
            Branch::NotRequired => 3,
            Branch::NullableAnnotated => 4,
        }
    }
}

/// Receives the branches a rule takes.
pub trait RuleObserver: Send + Sync {
    /// Called once per branch taken, in the order they are taken.
    fn observe(&self, branch: Branch);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RuleObserver for NoopObserver {
    fn observe(&self, _branch: Branch) {}
}

/// Lock-free branch counters.
///
/// Safe to share across threads applying rules to independent members.
#[derive(Debug, Default)]
pub struct BranchCoverage {
    counters: [AtomicU64; 5],
}

impl BranchCoverage {
    /// Create a collector with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for one branch.
    pub fn count(&self, branch: Branch) -> u64 {
        self.counters[branch.index()].load(Ordering::Relaxed)
    }

    /// Snapshot of all counters.
    pub fn report(&self) -> CoverageReport {
        CoverageReport {
            entries: Branch::ALL
                .iter()
                .map(|&branch| CoverageEntry {
                    branch,
                    count: self.count(branch),
                })
                .collect(),
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        for counter in &self.counters {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl RuleObserver for BranchCoverage {
    fn observe(&self, branch: Branch) {
        self.counters[branch.index()].fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time branch counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// One entry per branch, in [`Branch::ALL`] order
    pub entries: Vec<CoverageEntry>,
}

/// Count for a single branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageEntry {
    /// The branch
    pub branch: Branch,
    /// Times the branch was taken
    pub count: u64,
}

impl CoverageReport {
    /// Branches that were never taken.
    pub fn uncovered(&self) -> Vec<Branch> {
        self.entries
            .iter()
            .filter(|e| e.count == 0)
            .map(|e| e.branch)
            .collect()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.branch.label(), entry.count)?;
        }
        Ok(())
    }
}
