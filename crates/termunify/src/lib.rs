//! termunify: first-order syntactic unification
//!
//! This library implements the unification algorithm at the heart of
//! logic-programming engines: given two terms built from constants,
//! variables, and complex (functor-applied) terms, it either produces a
//! set of variable bindings that makes the terms syntactically identical,
//! or fails with a precise reason.
//!
//! No resolution engine, disjunction, or occurs-check is provided; a
//! variable may unify with a term containing itself, and resolving such a
//! binding does not terminate.

pub mod bindings;
pub mod error;
pub mod term;
pub mod unification;

// Re-export commonly used types
pub use bindings::Bindings;
pub use error::{UnifyError, UnifyResult};
pub use term::{Constant, Functor, Term, Variable};
pub use unification::{unify, unify_with};
