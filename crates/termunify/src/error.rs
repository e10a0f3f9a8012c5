//! Failure reasons for unification

use crate::bindings::Bindings;
use crate::term::{Constant, Term};
use thiserror::Error;

/// Why two terms cannot unify.
///
/// Every variant is fatal for the `unify` call that raised it; nothing is
/// recovered internally, and there is no partial-success return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    /// Both terms are constants with different values.
    #[error("{left} cannot unify with {right}")]
    ConstantsDiffer { left: Constant, right: Constant },

    /// A variable already concretely bound to one value was asked to bind
    /// to a different one.
    #[error("tried to bind {var} to {conflicting}, but it was already bound to {existing}")]
    BindingsConflict {
        var: String,
        existing: Term,
        conflicting: Term,
    },

    /// Both terms are complex but their functors or arities differ.
    #[error("{} cannot unify with {}", .left.shape(), .right.shape())]
    ComplexTermShapesDiffer { left: Term, right: Term },

    /// The terms have incompatible shapes (constant vs complex).
    #[error("cannot unify terms of different type {left} and {right}")]
    TermsOfDifferentType { left: Term, right: Term },
}

/// Result of a unification attempt.
pub type UnifyResult = Result<Bindings, UnifyError>;
