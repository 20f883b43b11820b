//! Schema keyword rules.
//!
//! This module defines the [`Rule`] trait and the rules implemented on it.

pub mod observer;
pub mod required;
pub mod traits;

pub use observer::{Branch, BranchCoverage, CoverageReport, NoopObserver, RuleObserver};
pub use required::{RequiredRule, REQUIRED_NOTE};
pub use traits::{Rule, RuleContext};
