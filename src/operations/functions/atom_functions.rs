use std::collections::HashSet;

use crate::formulas::{Formula, FormulaError};

/// A function that computes the set of all distinct atoms occurring in a
/// formula. For example, applied to `(p → (p ∨ s))` the atoms are `p` and
/// `s`; note that `p` occurs twice in the tree but only once in the result.
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
/// use proplogic::operations::functions::atoms;
///
/// let formula = Formula::implies(
///     Formula::atom("p"),
///     Formula::or(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// let result = atoms(&formula).unwrap();
///
/// assert_eq!(result.len(), 2);
/// assert!(result.contains(&Formula::atom("p")));
/// assert!(result.contains(&Formula::atom("s")));
/// ```
pub fn atoms(formula: &Formula) -> Result<HashSet<Formula>, FormulaError> {
    let mut result = HashSet::new();
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(_) => {
                result.insert(current.clone());
            }
            Formula::Not(inner) => worklist.push(inner),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right) => {
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

/// A function that counts the atom occurrences of a formula, *with*
/// repetition. Unlike [`atoms`], which deduplicates, every occurrence counts:
/// `(q → (p ∧ q))` has two distinct atoms but three atom occurrences.
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
/// use proplogic::operations::functions::number_of_atoms;
///
/// let formula = Formula::implies(
///     Formula::atom("q"),
///     Formula::and(Formula::atom("p"), Formula::atom("q")),
/// );
///
/// assert_eq!(number_of_atoms(&formula), Ok(3));
/// ```
pub fn number_of_atoms(formula: &Formula) -> Result<u64, FormulaError> {
    let mut result = 0;
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(_) => result += 1,
            Formula::Not(inner) => worklist.push(inner),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right) => {
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

/// A function that counts the connective occurrences of a formula: every
/// `Not`, `And`, `Or`, and `Implies` node counts one, atoms count zero. The
/// length of a formula is always the sum of its atom occurrences and its
/// connective occurrences.
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
/// use proplogic::operations::functions::number_of_connectives;
///
/// // ((¬p) ∨ (p ∧ s)) has three connectives
/// let formula = Formula::or(
///     Formula::not(Formula::atom("p")),
///     Formula::and(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// assert_eq!(number_of_connectives(&formula), Ok(3));
/// assert_eq!(number_of_connectives(&Formula::atom("p")), Ok(0));
/// ```
pub fn number_of_connectives(formula: &Formula) -> Result<u64, FormulaError> {
    let mut result = 0;
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(_) => {}
            Formula::Not(inner) => {
                result += 1;
                worklist.push(inner);
            }
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right) => {
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
