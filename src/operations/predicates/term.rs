use crate::formulas::Formula;

/// Literal predicate. Indicates whether a formula is a literal, i.e. an atom
/// or the negation of an atom. A double negation is not a literal.
///
/// [`Formula`] also directly provides this function as method, so instead of
/// `is_literal(&formula)` you can also call `formula.is_literal()`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_literal;
///
/// assert!(is_literal(&Formula::atom("p")));
/// assert!(is_literal(&Formula::not(Formula::atom("p"))));
/// assert!(!is_literal(&Formula::not(Formula::not(Formula::atom("p")))));
/// assert!(!is_literal(&Formula::and(Formula::atom("p"), Formula::atom("q"))));
/// ```
pub fn is_literal(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(_) => true,
        Formula::Not(inner) => inner.is_atom(),
        _ => false,
    }
}

/// Clause predicate. Indicates whether a formula is a clause, i.e. a literal
/// or a disjunction of two clauses, nested in any left/right shape.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_clause;
///
/// let clause = Formula::or(Formula::atom("p"), Formula::not(Formula::atom("q")));
/// let term = Formula::and(Formula::atom("p"), Formula::atom("q"));
///
/// assert!(is_clause(&clause));
/// assert!(!is_clause(&term));
/// ```
pub fn is_clause(formula: &Formula) -> bool {
    if is_literal(formula) {
        return true;
    }
    match formula {
        Formula::Or(left, right) => is_clause(left) && is_clause(right),
        _ => false,
    }
}

/// Term predicate. Indicates whether a formula is a term, i.e. a literal or
/// a conjunction of two terms.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_term;
///
/// let term = Formula::and(Formula::atom("p"), Formula::not(Formula::atom("q")));
/// let clause = Formula::or(Formula::atom("p"), Formula::atom("q"));
///
/// assert!(is_term(&term));
/// assert!(!is_term(&clause));
/// ```
pub fn is_term(formula: &Formula) -> bool {
    if is_literal(formula) {
        return true;
    }
    match formula {
        Formula::And(left, right) => is_term(left) && is_term(right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas::Formula;
    use crate::util::test_util::F;

    use super::{is_clause, is_literal, is_term};

    #[test]
    fn test_literal() {
        let ff = F::new();
        assert!(is_literal(&ff.a));
        assert!(is_literal(&ff.na));
        assert!(!is_literal(&Formula::not(ff.na.clone())));
        assert!(!is_literal(&ff.not1));
        assert!(!is_literal(&ff.and1));
        assert!(!is_literal(&ff.or1));
        assert!(!is_literal(&ff.imp1));
        assert!(!is_literal(&ff.eq1));
        assert!(!is_literal(&ff.xor1));
    }

    #[test]
    fn test_clause() {
        let ff = F::new();
        assert!(is_clause(&ff.a));
        assert!(is_clause(&ff.na));
        assert!(is_clause(&ff.or1));
        assert!(is_clause(&ff.or2));
        let nested = Formula::or(ff.or1.clone(), Formula::or(ff.na.clone(), ff.b.clone()));
        assert!(is_clause(&nested));
        assert!(!is_clause(&ff.and1));
        assert!(!is_clause(&ff.or3));
        assert!(!is_clause(&ff.imp1));
        assert!(!is_clause(&ff.not1));
        assert!(!is_clause(&ff.eq1));
    }

    #[test]
    fn test_term() {
        let ff = F::new();
        assert!(is_term(&ff.a));
        assert!(is_term(&ff.na));
        assert!(is_term(&ff.and1));
        assert!(is_term(&ff.and2));
        let nested = Formula::and(ff.and1.clone(), Formula::and(ff.nx.clone(), ff.y.clone()));
        assert!(is_term(&nested));
        assert!(!is_term(&ff.or1));
        assert!(!is_term(&ff.and3));
        assert!(!is_term(&ff.imp1));
        assert!(!is_term(&ff.not2));
        assert!(!is_term(&ff.xor1));
    }
}
