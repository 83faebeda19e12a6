/// A transformation takes a formula as input and returns another formula,
/// thus transforming the input formula. The only transformation in this crate
/// is sub-formula substitution.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula is in a certain normal form like NNF,
/// CNF, or DNF.
pub mod predicates;

/// A function takes a formula as input and computes some value on that
/// formula. This value can be a simple integer, e.g. the length of a
/// formula, or a more complex result type, like the set of sub-formulas.
pub mod functions;
