//! # trisat-format
//!
//! Wire format for solve results: the step-by-step solving trace, run
//! statistics, and the top-level JSON report document the demo boundary
//! reads from the solver's stdout.

pub mod report;
pub mod trace;

pub use report::SolveReport;
pub use trace::{ActionType, SolvingProcess, SolvingStatistics, SolvingStep};
