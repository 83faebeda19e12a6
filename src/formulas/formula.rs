use std::collections::HashSet;
use std::fmt;

use crate::formulas::FormulaError;
use crate::operations::{functions, predicates, transformations};

/// Specifies all types a [`Formula`] can have.
///
/// You can get the type of a `Formula` by calling [`Formula::formula_type()`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Atomic proposition
    Atom,
    /// Negation
    Not,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Implies,
    /// Equivalence
    Iff,
    /// Exclusive disjunction
    Xor,
}

impl fmt::Display for FormulaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Atom => "Atom",
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::Implies => "Implies",
            Self::Iff => "Iff",
            Self::Xor => "Xor",
        };
        write!(f, "{name}")
    }
}

/// A propositional formula, represented as a recursive syntax tree.
///
/// A formula is built bottom-up from the seven variant constructors. Equality
/// and hashing are structural: two independently constructed trees with the
/// same shape and atom names are equal and hash identically, which makes
/// formulas usable as set members and map keys. No canonicalization happens
/// on construction — `a ∧ b` and `b ∧ a` are distinct formulas, and
/// associative chains are kept exactly as nested.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
///
/// // (p → (p ∨ s))
/// let formula = Formula::implies(
///     Formula::atom("p"),
///     Formula::or(Formula::atom("p"), Formula::atom("s")),
/// );
///
/// assert_eq!(formula.to_string(), "(p → (p ∨ s))");
/// assert_eq!(formula, formula.clone());
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// An atomic proposition, identified by its name.
    Atom(String),
    /// Negation of a formula.
    Not(Box<Formula>),
    /// Conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),
    /// Implication between two formulas.
    Implies(Box<Formula>, Box<Formula>),
    /// Equivalence of two formulas.
    Iff(Box<Formula>, Box<Formula>),
    /// Exclusive disjunction of two formulas.
    Xor(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates an atomic proposition with the given name.
    ///
    /// Any name is accepted; there is no validation or interning.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// use proplogic::formulas::Formula;
    ///
    /// let p = Formula::atom("p");
    /// assert_eq!(p.to_string(), "p");
    /// assert_eq!(p, Formula::atom("p"));
    /// ```
    pub fn atom<S: Into<String>>(name: S) -> Self {
        Self::Atom(name.into())
    }

    /// Creates the negation of `inner`.
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Creates the conjunction `left ∧ right`.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates the disjunction `left ∨ right`.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Creates the implication `left → right`.
    pub fn implies(left: Self, right: Self) -> Self {
        Self::Implies(Box::new(left), Box::new(right))
    }

    /// Creates the equivalence `left ↔ right`.
    pub fn iff(left: Self, right: Self) -> Self {
        Self::Iff(Box::new(left), Box::new(right))
    }

    /// Creates the exclusive disjunction `left ⊕ right`.
    pub fn xor(left: Self, right: Self) -> Self {
        Self::Xor(Box::new(left), Box::new(right))
    }

    /// Returns the type of this formula as a [`FormulaType`].
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// use proplogic::formulas::{Formula, FormulaType};
    ///
    /// let formula = Formula::and(Formula::atom("a"), Formula::atom("b"));
    ///
    /// assert_eq!(formula.formula_type(), FormulaType::And);
    /// assert_eq!(Formula::atom("a").formula_type(), FormulaType::Atom);
    /// ```
    pub const fn formula_type(&self) -> FormulaType {
        match self {
            Self::Atom(_) => FormulaType::Atom,
            Self::Not(_) => FormulaType::Not,
            Self::And(_, _) => FormulaType::And,
            Self::Or(_, _) => FormulaType::Or,
            Self::Implies(_, _) => FormulaType::Implies,
            Self::Iff(_, _) => FormulaType::Iff,
            Self::Xor(_, _) => FormulaType::Xor,
        }
    }

    /// Returns `true` if this formula is an atomic proposition.
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns the name of this formula if it is an atomic proposition.
    pub fn as_atom_name(&self) -> Option<&str> {
        match self {
            Self::Atom(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the length of this formula. Equivalent to
    /// [`length`](crate::operations::functions::length).
    pub fn length(&self) -> Result<u64, FormulaError> {
        functions::length(self)
    }

    /// Returns all distinct sub-formulas of this formula. Equivalent to
    /// [`subformulas`](crate::operations::functions::subformulas).
    pub fn subformulas(&self) -> Result<HashSet<Self>, FormulaError> {
        functions::subformulas(self)
    }

    /// Returns the distinct atoms of this formula. Equivalent to
    /// [`atoms`](crate::operations::functions::atoms).
    pub fn atoms(&self) -> Result<HashSet<Self>, FormulaError> {
        functions::atoms(self)
    }

    /// Counts atom occurrences with repetition. Equivalent to
    /// [`number_of_atoms`](crate::operations::functions::number_of_atoms).
    pub fn number_of_atoms(&self) -> Result<u64, FormulaError> {
        functions::number_of_atoms(self)
    }

    /// Counts connective occurrences. Equivalent to
    /// [`number_of_connectives`](crate::operations::functions::number_of_connectives).
    pub fn number_of_connectives(&self) -> Result<u64, FormulaError> {
        functions::number_of_connectives(self)
    }

    /// Returns `true` if this formula is a literal. Equivalent to
    /// [`is_literal`](crate::operations::predicates::is_literal).
    pub fn is_literal(&self) -> bool {
        predicates::is_literal(self)
    }

    /// Returns `true` if this formula is a clause. Equivalent to
    /// [`is_clause`](crate::operations::predicates::is_clause).
    pub fn is_clause(&self) -> bool {
        predicates::is_clause(self)
    }

    /// Returns `true` if this formula is a term. Equivalent to
    /// [`is_term`](crate::operations::predicates::is_term).
    pub fn is_term(&self) -> bool {
        predicates::is_term(self)
    }

    /// Returns `true` if this formula is in NNF. Equivalent to
    /// [`is_nnf`](crate::operations::predicates::is_nnf).
    pub fn is_nnf(&self) -> bool {
        predicates::is_nnf(self)
    }

    /// Returns `true` if this formula is in CNF. Equivalent to
    /// [`is_cnf`](crate::operations::predicates::is_cnf).
    pub fn is_cnf(&self) -> bool {
        predicates::is_cnf(self)
    }

    /// Returns `true` if this formula is in DNF. Equivalent to
    /// [`is_dnf`](crate::operations::predicates::is_dnf).
    pub fn is_dnf(&self) -> bool {
        predicates::is_dnf(self)
    }

    /// Returns `true` if this formula is in DNNF. Equivalent to
    /// [`is_dnnf`](crate::operations::predicates::is_dnnf).
    pub fn is_dnnf(&self) -> bool {
        predicates::is_dnnf(self)
    }

    /// Replaces every occurrence of `old` in this formula by `new`.
    /// Equivalent to
    /// [`substitute`](crate::operations::transformations::substitute).
    pub fn substitute(&self, old: &Self, new: &Self) -> Result<Self, FormulaError> {
        transformations::substitute(self, old, new)
    }
}

/// Renders the formula fully parenthesized, with Unicode connective symbols.
///
/// Every connective application gets its own pair of parentheses; only atoms
/// are printed bare.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
///
/// let formula = Formula::not(Formula::and(Formula::atom("a"), Formula::atom("b")));
///
/// assert_eq!(formula.to_string(), "(¬(a ∧ b))");
/// ```
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{name}"),
            Self::Not(inner) => write!(f, "(¬{inner})"),
            Self::And(left, right) => write!(f, "({left} ∧ {right})"),
            Self::Or(left, right) => write!(f, "({left} ∨ {right})"),
            Self::Implies(left, right) => write!(f, "({left} → {right})"),
            Self::Iff(left, right) => write!(f, "({left} ↔ {right})"),
            Self::Xor(left, right) => write!(f, "({left} ⊕ {right})"),
        }
    }
}
