use crate::formulas::{Formula, FormulaError};

/// A function that returns the length of a formula, i.e. the number of nodes
/// in its syntax tree: an atom counts one, a negation counts one plus its
/// operand, and a binary connective counts one plus both operands.
///
/// The traversal uses an explicit worklist, so its stack usage does not grow
/// with the depth of the formula.
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
/// use proplogic::operations::functions::length;
///
/// // (p → (p ∨ s))
/// let formula = Formula::implies(
///     Formula::atom("p"),
///     Formula::or(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// assert_eq!(length(&formula), Ok(5));
/// assert_eq!(length(&Formula::atom("p")), Ok(1));
/// ```
pub fn length(formula: &Formula) -> Result<u64, FormulaError> {
    let mut result = 0;
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(_) => result += 1,
            Formula::Not(inner) => {
                result += 1;
                worklist.push(inner);
            }
            Formula::And(left, right) | Formula::Or(left, right) | Formula::Implies(left, right) => {
                result += 1;
                worklist.push(left);
                worklist.push(right);
            }
            Formula::Iff(_, _) | Formula::Xor(_, _) => {
                return Err(FormulaError::UnsupportedConnective(current.formula_type()))
            }
        }
    }
    Ok(result)
}
