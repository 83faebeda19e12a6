use crate::formulas::Formula;

use super::term::is_term;

/// DNF predicate. Indicates whether a formula is in disjunctive normal form,
/// i.e. a term, or a disjunction of two DNF formulas.
///
/// [`Formula`] also directly provides this function as method, so instead of
/// `is_dnf(&formula)` you can also call `formula.is_dnf()`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_dnf;
///
/// // ((p ∧ q) ∨ ((¬p) ∧ r))
/// let dnf = Formula::or(
///     Formula::and(Formula::atom("p"), Formula::atom("q")),
///     Formula::and(Formula::not(Formula::atom("p")), Formula::atom("r")),
/// );
/// // ((p ∨ q) ∧ ((¬p) ∨ r)) is CNF, not DNF
/// let cnf = Formula::and(
///     Formula::or(Formula::atom("p"), Formula::atom("q")),
///     Formula::or(Formula::not(Formula::atom("p")), Formula::atom("r")),
/// );
///
/// assert!(is_dnf(&dnf));
/// assert!(!is_dnf(&cnf));
/// ```
pub fn is_dnf(formula: &Formula) -> bool {
    if is_term(formula) {
        return true;
    }
    match formula {
        Formula::Or(left, right) => is_dnf(left) && is_dnf(right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas::Formula;
    use crate::util::test_util::F;

    use super::is_dnf;

    #[test]
    fn test() {
        let ff = F::new();
        assert!(is_dnf(&ff.a));
        assert!(is_dnf(&ff.na));
        assert!(is_dnf(&ff.or1));
        assert!(is_dnf(&ff.and1));
        assert!(is_dnf(&ff.or3));
        assert!(is_dnf(&Formula::or(ff.or3.clone(), ff.and1.clone())));
        assert!(!is_dnf(&ff.and3));
        assert!(!is_dnf(&ff.imp1));
        assert!(!is_dnf(&ff.eq1));
        assert!(!is_dnf(&ff.xor1));
        assert!(!is_dnf(&ff.not1));
        assert!(!is_dnf(&ff.not2));
        assert!(!is_dnf(&Formula::or(ff.and1.clone(), ff.imp1.clone())));
    }
}
