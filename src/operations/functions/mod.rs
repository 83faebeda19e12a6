mod atom_functions;
mod length_function;
mod subformula_function;

pub use atom_functions::*;
pub use length_function::*;
pub use subformula_function::*;
