//! # trisat-base
//!
//! Core types for the trisat demo solver.
//!
//! This crate provides the building blocks shared by all other trisat
//! crates:
//!
//! - **Domain Types**: literals, clauses, formulas, partial assignments
//! - **Error Types**: unified error handling across the solver

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Assignment, Clause, Formula, Literal, VarId, CLAUSE_WIDTH};
