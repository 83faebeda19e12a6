#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Types to represent and compare propositional formulas.
pub mod formulas;
/// Functions, predicates, and transformations for formulas.
pub mod operations;
mod util;
