//! Pruning layer
//! - protection.rs: Tag protection rule
//! - pruner.rs: Candidate selection and the per-package prune flow
//! - report.rs: Per-package reports and run totals

pub mod protection;
pub mod pruner;
pub mod report;

pub use protection::is_protected;
pub use pruner::{Pruner, select_candidates};
pub use report::{PruneReport, RunSummary};
