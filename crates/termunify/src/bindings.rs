//! Binding store: the variable-to-value graph built up during unification

use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UnifyError;
use crate::term::{Term, Variable};

/// A scope of instantiated variables.
///
/// Conceptually a directed acyclic graph: each variable name has at most
/// one outgoing edge, pointing either at another variable or at a concrete
/// value. Acyclicity is preserved structurally — two variables are never
/// pointed at each other; equating them routes both through a variable
/// minted by [`Bindings::fresh`], so every chain terminates in a concrete
/// value or an unbound variable.
///
/// Bindings accumulate monotonically over one unification call, or over a
/// whole session when the caller threads the same store through several
/// calls. Iteration order is insertion order, so diagnostics and renderings
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    map: IndexMap<String, Term>,
    next_fresh: u64,
}

impl Bindings {
    /// Create an empty store.
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Record that variable `name` resolves to `value`.
    ///
    /// If `name` is already bound to another variable, the chain is
    /// followed and the variable at its end is bound instead, so bindings
    /// keep pointing toward the eventual value. Rebinding to an equal
    /// concrete value is a no-op; rebinding to a different one fails.
    pub fn bind(&mut self, name: &str, value: Term) -> Result<(), UnifyError> {
        // A variable trivially resolves to itself; recording the self-edge
        // would put a cycle in the graph.
        if matches!(&value, Term::Variable(v) if v.name == name) {
            return Ok(());
        }
        match self.map.get(name) {
            None => {
                trace!("bind {} -> {}", name, value);
                self.map.insert(name.to_string(), value);
                Ok(())
            }
            Some(Term::Variable(next)) => {
                let next = next.name.clone();
                self.bind(&next, value)
            }
            Some(existing) if *existing == value => Ok(()),
            Some(existing) => Err(UnifyError::BindingsConflict {
                var: name.to_string(),
                existing: existing.clone(),
                conflicting: value,
            }),
        }
    }

    /// Follow the chain of bindings starting at `name` to its terminal
    /// value.
    ///
    /// An unbound variable resolves to itself. Cannot loop: the binding
    /// graph is acyclic.
    pub fn resolve(&self, name: &str) -> Term {
        match self.map.get(name) {
            Some(Term::Variable(next)) => self.resolve(&next.name),
            Some(value) => value.clone(),
            None => Term::Variable(Variable::new(name)),
        }
    }

    /// Resolve every variable inside `term`, recursively, producing the
    /// fully flattened form under the current bindings.
    ///
    /// Without an occurs-check a variable can be bound to a complex term
    /// containing itself; resolving such a term does not terminate.
    pub fn resolve_term(&self, term: &Term) -> Term {
        match term {
            Term::Constant(_) => term.clone(),
            Term::Variable(v) => {
                let target = self.resolve(&v.name);
                if target.is_complex() {
                    self.resolve_term(&target)
                } else {
                    target
                }
            }
            Term::Complex(functor, args) => Term::Complex(
                functor.clone(),
                args.iter().map(|arg| self.resolve_term(arg)).collect(),
            ),
        }
    }

    /// Mint a variable guaranteed distinct from all previously minted ones.
    ///
    /// Generated names use the reserved leading-underscore scheme (`_1`,
    /// `_2`, ...) not expected from user input. The counter is scoped to
    /// this store, so independent sessions never interfere.
    pub fn fresh(&mut self) -> Variable {
        self.next_fresh += 1;
        Variable::new(format!("_{}", self.next_fresh))
    }

    /// Look up the direct binding of a variable, without chain-following.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    /// Iterate over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", name, term)?;
        }
        write!(f, "}}")
    }
}
