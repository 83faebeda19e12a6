use crate::formulas::Formula;

use super::term::is_clause;

/// CNF predicate. Indicates whether a formula is in conjunctive normal form,
/// i.e. a clause, or a conjunction of two CNF formulas.
///
/// [`Formula`] also directly provides this function as method, so instead of
/// `is_cnf(&formula)` you can also call `formula.is_cnf()`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_cnf;
///
/// // ((p ∨ q) ∧ ((¬p) ∨ r))
/// let cnf = Formula::and(
///     Formula::or(Formula::atom("p"), Formula::atom("q")),
///     Formula::or(Formula::not(Formula::atom("p")), Formula::atom("r")),
/// );
/// let implication = Formula::implies(Formula::atom("p"), Formula::atom("q"));
///
/// assert!(is_cnf(&cnf));
/// assert!(!is_cnf(&implication));
/// ```
pub fn is_cnf(formula: &Formula) -> bool {
    if is_clause(formula) {
        return true;
    }
    match formula {
        Formula::And(left, right) => is_cnf(left) && is_cnf(right),
        _ => false,
    }
}
