use std::collections::HashSet;

use crate::formulas::{Formula, FormulaError};

/// A function that computes the set of all sub-formulas of a given formula.
/// The formula itself is part of the result, and each structurally distinct
/// sub-formula appears exactly once. For example, applied to
/// `(p → (p ∨ s))` the sub-formulas are
///
/// - `p`
/// - `s`
/// - `(p ∨ s)`
/// - `(p → (p ∨ s))`
///
/// Note that `p` occurs twice in the tree but only once in the result. As a
/// consequence, the size of the result never exceeds
/// [`length`](crate::operations::functions::length).
///
/// The traversal uses an explicit worklist; sub-trees already collected are
/// not descended into again.
///
/// `Iff` and `Xor` are outside the supported fragment; a formula containing
/// either anywhere fails with
/// [`FormulaError::UnsupportedConnective`].
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::functions::subformulas;
///
/// let formula = Formula::implies(
///     Formula::atom("p"),
///     Formula::or(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// let result = subformulas(&formula).unwrap();
///
/// assert_eq!(result.len(), 4);
/// assert!(result.contains(&Formula::atom("p")));
/// assert!(result.contains(&formula));
/// ```
pub fn subformulas(formula: &Formula) -> Result<HashSet<Formula>, FormulaError> {
    let mut result = HashSet::new();
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(_) => {
                result.insert(current.clone());
            }
            Formula::Not(inner) => {
                if result.insert(current.clone()) {
                    worklist.push(inner);
                }
            }
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right) => {
                if result.insert(current.clone()) {
                    worklist.push(left);
                    worklist.push(right);
                }
            }
            Formula::Iff(_, _) | Formula::Xor(_, _) => {
                return Err(FormulaError::UnsupportedConnective(current.formula_type()))
            }
        }
    }
    Ok(result)
}
