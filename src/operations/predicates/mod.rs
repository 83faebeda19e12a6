mod cnf;
mod dnf;
mod dnnf;
mod nnf;
mod term;

pub use cnf::*;
pub use dnf::*;
pub use dnnf::*;
pub use nnf::*;
pub use term::*;
