#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::formulas::Formula;

pub fn hash<H>(element: H) -> u64
where H: Hash {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

/// A fixture of named formulas shared by the unit tests.
pub struct F {
    // Atoms
    pub a: Formula,
    pub b: Formula,
    pub c: Formula,
    pub x: Formula,
    pub y: Formula,

    // Negative literals
    pub na: Formula,
    pub nb: Formula,
    pub nx: Formula,
    pub ny: Formula,

    // Disjunctions
    pub or1: Formula,
    pub or2: Formula,
    pub or3: Formula,

    // Conjunctions
    pub and1: Formula,
    pub and2: Formula,
    pub and3: Formula,

    // Negations
    pub not1: Formula,
    pub not2: Formula,

    // Implications
    pub imp1: Formula,
    pub imp2: Formula,
    pub imp3: Formula,

    // Equivalences
    pub eq1: Formula,
    pub eq2: Formula,

    // Exclusive disjunctions
    pub xor1: Formula,
    pub xor2: Formula,

    // An equivalence buried inside a supported connective
    pub imp_with_iff: Formula,
}

impl F {
    pub fn new() -> Self {
        let a = Formula::atom("a");
        let b = Formula::atom("b");
        let c = Formula::atom("c");
        let x = Formula::atom("x");
        let y = Formula::atom("y");

        let na = Formula::not(a.clone());
        let nb = Formula::not(b.clone());
        let nx = Formula::not(x.clone());
        let ny = Formula::not(y.clone());

        let or1 = Formula::or(x.clone(), y.clone());
        let or2 = Formula::or(nx.clone(), ny.clone());
        let and1 = Formula::and(a.clone(), b.clone());
        let and2 = Formula::and(na.clone(), nb.clone());

        let or3 = Formula::or(and1.clone(), and2.clone());
        let and3 = Formula::and(or1.clone(), or2.clone());

        let not1 = Formula::not(and1.clone());
        let not2 = Formula::not(or1.clone());

        let imp1 = Formula::implies(a.clone(), b.clone());
        let imp2 = Formula::implies(na.clone(), nb.clone());
        let imp3 = Formula::implies(and1.clone(), or1.clone());

        let eq1 = Formula::iff(a.clone(), b.clone());
        let eq2 = Formula::iff(and1.clone(), or1.clone());

        let xor1 = Formula::xor(a.clone(), b.clone());
        let xor2 = Formula::xor(and1.clone(), or1.clone());

        let imp_with_iff = Formula::implies(a.clone(), Formula::iff(b.clone(), c.clone()));

        Self {
            a,
            b,
            c,
            x,
            y,
            na,
            nb,
            nx,
            ny,
            or1,
            or2,
            or3,
            and1,
            and2,
            and3,
            not1,
            not2,
            imp1,
            imp2,
            imp3,
            eq1,
            eq2,
            xor1,
            xor2,
            imp_with_iff,
        }
    }
}
