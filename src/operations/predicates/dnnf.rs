use std::collections::HashSet;

use log::debug;

use crate::formulas::Formula;

use super::nnf::is_nnf;

/// DNNF predicate. Indicates whether a formula is in decomposable negation
/// normal form.
///
/// The formula must be in NNF to begin with. A conjunction whose two sides
/// share no atoms is decomposable: the sides can be reasoned about
/// independently. Such a conjunction satisfies the predicate directly. A
/// conjunction whose sides do share atoms satisfies it only if both sides do
/// recursively, and a disjunction requires both sides to be in DNNF with no
/// disjointness shortcut. Everything else, including a plain literal, does
/// not satisfy the predicate.
///
/// [`Formula`] also directly provides this function as method, so instead of
/// `is_dnnf(&formula)` you can also call `formula.is_dnnf()`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_dnnf;
///
/// // (p ∧ q): the sides share no atoms
/// let decomposable = Formula::and(Formula::atom("p"), Formula::atom("q"));
/// // ((p ∧ q) → r) is not even in NNF
/// let implication = Formula::implies(decomposable.clone(), Formula::atom("r"));
///
/// assert!(is_dnnf(&decomposable));
/// assert!(!is_dnnf(&implication));
/// ```
pub fn is_dnnf(formula: &Formula) -> bool {
    if !is_nnf(formula) {
        return false;
    }
    match formula {
        Formula::And(left, right) => {
            if nnf_atoms(left).is_disjoint(&nnf_atoms(right)) {
                debug!("decomposable conjunction: {formula}");
                true
            } else {
                debug!("conjunction with shared atoms: {formula}");
                is_dnnf(left) && is_dnnf(right)
            }
        }
        Formula::Or(left, right) => is_dnnf(left) && is_dnnf(right),
        _ => false,
    }
}

// Atom names of an NNF formula. The NNF gate above guarantees only
// atoms, negated atoms, conjunctions, and disjunctions are reachable.
fn nnf_atoms(formula: &Formula) -> HashSet<&str> {
    let mut result = HashSet::new();
    let mut worklist = vec![formula];
    while let Some(current) = worklist.pop() {
        match current {
            Formula::Atom(name) => {
                result.insert(name.as_str());
            }
            Formula::Not(inner) => worklist.push(inner),
            Formula::And(left, right) | Formula::Or(left, right) => {
                worklist.push(left);
                worklist.push(right);
            }
            Formula::Implies(_, _) | Formula::Iff(_, _) | Formula::Xor(_, _) => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::formulas::Formula;
    use crate::util::test_util::F;

    use super::is_dnnf;

    #[test]
    fn test_disjoint_conjunction() {
        let ff = F::new();
        // (a ∧ b) and ((¬a) ∧ (¬b)): both sides are single atoms
        assert!(is_dnnf(&ff.and1));
        assert!(is_dnnf(&ff.and2));
        // ((x ∨ y) ∧ ((¬x) ∨ (¬y))) shares x and y across the conjunction
        assert!(!is_dnnf(&ff.and3));
    }

    #[test]
    fn test_disjunction() {
        let ff = F::new();
        // ((a ∧ b) ∨ ((¬a) ∧ (¬b))): both sides are decomposable conjunctions
        assert!(is_dnnf(&ff.or3));
        // a disjunction of bare literals has no decomposable conjunction below
        assert!(!is_dnnf(&ff.or1));
    }

    #[test]
    fn test_shared_atoms_resolved_below() {
        let ff = F::new();
        // ((a ∧ b) ∧ (a ∧ c)): shares a at the root, but both sides are
        // themselves decomposable conjunctions
        let formula = Formula::and(
            ff.and1.clone(),
            Formula::and(ff.a.clone(), Formula::atom("c")),
        );
        assert!(is_dnnf(&formula));
    }

    #[test]
    fn test_non_nnf_shapes() {
        let ff = F::new();
        assert!(!is_dnnf(&ff.a));
        assert!(!is_dnnf(&ff.na));
        assert!(!is_dnnf(&ff.imp1));
        assert!(!is_dnnf(&ff.eq1));
        assert!(!is_dnnf(&ff.xor1));
        assert!(!is_dnnf(&ff.not1));
    }
}
