mod substitution;

pub use substitution::*;
