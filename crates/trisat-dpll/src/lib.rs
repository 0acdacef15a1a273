//! # trisat-dpll
//!
//! Backtracking 3-SAT search with a full decision trace.
//!
//! Implements:
//! - Unit propagation
//! - Pure-literal elimination
//! - Two-clause branch selection
//! - Chronological backtracking with strict bind/undo discipline
//!
//! Every decision event is appended to an ordered trace so the search can
//! be replayed step by step by the demo frontend. The search is
//! deterministic: rule priority is fixed, branches try `true` before
//! `false`, and ties break toward the lowest variable index and the
//! earliest clause in formula order.

pub mod exhaustive;
pub mod solver;
pub mod trace;
pub mod view;

pub use exhaustive::exhaustive_satisfiable;
pub use solver::{solve, DpllSolver};
pub use trace::TraceLog;
pub use view::{ClauseState, FormulaView};
