mod error;
mod formula;

pub use error::*;
pub use formula::*;
