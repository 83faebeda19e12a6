use std::fmt::{self, Display};

use crate::formulas::FormulaType;

/// Errors reported by the structural analysis operations.
///
/// The size and collection functions and the substitution only handle the
/// `Atom`/`Not`/`And`/`Or`/`Implies` fragment. Meeting an `Iff` or `Xor`
/// node anywhere in the tree aborts the whole computation with
/// [`UnsupportedConnective`](FormulaError::UnsupportedConnective); no
/// partial result is produced and nothing is caught internally.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::{Formula, FormulaError, FormulaType};
///
/// let formula = Formula::xor(Formula::atom("a"), Formula::atom("b"));
///
/// assert_eq!(
///     formula.length(),
///     Err(FormulaError::UnsupportedConnective(FormulaType::Xor)),
/// );
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The operation reached a connective outside the fragment it supports.
    UnsupportedConnective(FormulaType),
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConnective(ty) => {
                write!(f, "unsupported connective in formula: {ty}")
            }
        }
    }
}

impl std::error::Error for FormulaError {}
