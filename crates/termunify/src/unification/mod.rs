//! Unification algorithm for first-order terms

mod unify;


pub use unify::{unify, unify_with};
