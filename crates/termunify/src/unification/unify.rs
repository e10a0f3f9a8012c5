//! The recursive unification procedure

use log::trace;

use crate::bindings::Bindings;
use crate::error::{UnifyError, UnifyResult};
use crate::term::Term;

/// Unify two terms in a fresh binding store.
///
/// On success the returned store holds a most-general substitution making
/// the terms syntactically identical once every variable is resolved
/// through [`Bindings::resolve`]. Intermediate fresh variables introduced
/// while aliasing variable pairs may remain visible in the raw mapping;
/// [`Bindings::resolve_term`] flattens them away.
pub fn unify(a: &Term, b: &Term) -> UnifyResult {
    let mut bindings = Bindings::new();
    unify_with(a, b, &mut bindings)?;
    Ok(bindings)
}

/// Unify two terms, extending a caller-supplied binding store.
///
/// Threading one store through several calls accumulates constraints over
/// a session sharing a variable namespace. On failure the store may be
/// left partially extended; failure abandons the whole call.
pub fn unify_with(a: &Term, b: &Term, bindings: &mut Bindings) -> Result<(), UnifyError> {
    match (a, b) {
        (Term::Constant(x), Term::Constant(y)) => {
            if x == y {
                Ok(())
            } else {
                Err(UnifyError::ConstantsDiffer {
                    left: x.clone(),
                    right: y.clone(),
                })
            }
        }

        (Term::Variable(x), Term::Variable(y)) => {
            // Binding the two variables to each other would put a cycle in
            // the binding graph; route both through a fresh variable so
            // every chain still ends in a concrete value or an unbound leaf.
            let fresh = bindings.fresh();
            trace!("alias {} and {} via {}", x.name, y.name, fresh.name);
            bindings.bind(&x.name, Term::Variable(fresh.clone()))?;
            bindings.bind(&y.name, Term::Variable(fresh))?;
            Ok(())
        }

        (Term::Variable(x), other) => bindings.bind(&x.name, other.clone()),
        (other, Term::Variable(y)) => bindings.bind(&y.name, other.clone()),

        (Term::Complex(f, f_args), Term::Complex(g, g_args)) => {
            if f.name != g.name || f.arity != g.arity {
                return Err(UnifyError::ComplexTermShapesDiffer {
                    left: a.clone(),
                    right: b.clone(),
                });
            }
            // Bindings found in earlier argument positions constrain later
            // ones; the first failing pair aborts the whole term.
            for (x, y) in f_args.iter().zip(g_args) {
                unify_with(x, y, bindings)?;
            }
            Ok(())
        }

        (Term::Constant(_), Term::Complex(..)) | (Term::Complex(..), Term::Constant(_)) => {
            Err(UnifyError::TermsOfDifferentType {
                left: a.clone(),
                right: b.clone(),
            })
        }
    }
}
