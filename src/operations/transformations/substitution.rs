use log::trace;

use crate::formulas::{Formula, FormulaError};

/// Replaces every occurrence of `old` in `formula` by `new`.
///
/// Occurrences are matched by structural equality, and the top-level check
/// takes precedence over descent: if a whole sub-tree equals `old` it is
/// replaced wholesale, never descended into. In particular, if `formula`
/// itself equals `old`, the result is just `new`.
///
/// The rewrite is purely functional. It returns a fresh tree and leaves
/// `formula` untouched, so sub-trees shared with other formulas are never
/// observably rewritten.
///
/// `Iff` and `Xor` are outside the supported fragment; unless such a node is
/// itself replaced wholesale by the top-level check, reaching it fails with
/// [`FormulaError::UnsupportedConnective`].
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::transformations::substitute;
///
/// // (p → (p ∨ s))
/// let formula = Formula::implies(
///     Formula::atom("p"),
///     Formula::or(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// let result = substitute(&formula, &Formula::atom("p"), &Formula::atom("q")).unwrap();
///
/// assert_eq!(result.to_string(), "(q → (q ∨ s))");
/// // the input is untouched
/// assert_eq!(formula.to_string(), "(p → (p ∨ s))");
/// ```
pub fn substitute(formula: &Formula, old: &Formula, new: &Formula) -> Result<Formula, FormulaError> {
    if formula == old {
        trace!("replacing sub-tree {formula}");
        return Ok(new.clone());
    }
    match formula {
        Formula::Atom(_) => Ok(formula.clone()),
        Formula::Not(inner) => Ok(Formula::not(substitute(inner, old, new)?)),
        Formula::And(left, right) => Ok(Formula::and(
            substitute(left, old, new)?,
            substitute(right, old, new)?,
        )),
        Formula::Or(left, right) => Ok(Formula::or(
            substitute(left, old, new)?,
            substitute(right, old, new)?,
        )),
        Formula::Implies(left, right) => Ok(Formula::implies(
            substitute(left, old, new)?,
            substitute(right, old, new)?,
        )),
        Formula::Iff(_, _) | Formula::Xor(_, _) => {
            Err(FormulaError::UnsupportedConnective(formula.formula_type()))
        }
    }
}
