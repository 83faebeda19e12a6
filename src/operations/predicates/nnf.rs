use crate::formulas::Formula;

use super::term::is_literal;

/// NNF predicate. Indicates whether a formula is in negation normal form,
/// i.e. a literal, or a conjunction or disjunction whose both sides are in
/// NNF. In an NNF formula every negation sits directly above an atom.
///
/// This predicate only checks the property; it does not push negations down.
///
/// [`Formula`] also directly provides this function as method, so instead of
/// `is_nnf(&formula)` you can also call `formula.is_nnf()`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_nnf;
///
/// let nnf = Formula::and(
///     Formula::atom("a"),
///     Formula::or(Formula::not(Formula::atom("b")), Formula::atom("c")),
/// );
/// let negated_disjunction = Formula::not(Formula::or(Formula::atom("a"), Formula::atom("b")));
///
/// assert!(is_nnf(&nnf));
/// assert!(!is_nnf(&negated_disjunction));
/// ```
pub fn is_nnf(formula: &Formula) -> bool {
    if is_literal(formula) {
        return true;
    }
    match formula {
        Formula::And(left, right) | Formula::Or(left, right) => is_nnf(left) && is_nnf(right),
        _ => false,
    }
}
