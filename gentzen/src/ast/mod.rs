//! The formula model: terms, predicates, connectives, quantifiers and pending instantiations,
//! together with alpha-equivalence and capture-avoiding substitution.

#[macro_use]
mod macros;
mod alpha;
mod formula;
mod names;
mod printer;
mod substitution;

pub use alpha::alpha_equiv;
pub use formula::{ConstructionError, ConstructionResult, Connective, Formula, Quantifier};
pub use names::{FreshNames, EIGENVARIABLE_PREFIX, WITNESS_CONSTANT_PREFIX};
pub use std::rc::Rc;
pub use substitution::{substitute, Substitution, SubstitutionError};
