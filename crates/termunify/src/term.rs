//! First-order terms: constants, variables, and complex terms

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An atomic constant: a number or a symbolic atom, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Int(i64),
    Atom(String),
}

/// A named placeholder.
///
/// Two variables with the same name are the same variable; the value a
/// variable stands for lives in a [`crate::Bindings`] store, never in the
/// variable itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A functor symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Functor {
    pub name: String,
    pub arity: usize,
}

impl Functor {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Functor {
            name: name.into(),
            arity,
        }
    }
}

/// A first-order term.
///
/// Terms are immutable once constructed; equality is structural and never
/// depends on object identity. The arity of a complex term is fixed at
/// construction and equals the length of its argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// An atomic value: number or atom
    Constant(Constant),
    /// A variable
    Variable(Variable),
    /// A functor applied to an ordered list of argument terms
    Complex(Functor, Vec<Term>),
}

impl Term {
    /// Create an integer constant term.
    pub fn int(value: i64) -> Self {
        Term::Constant(Constant::Int(value))
    }

    /// Create an atom constant term.
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Constant(Constant::Atom(name.into()))
    }

    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// Create a complex term. The functor's arity is the argument count.
    pub fn complex(name: impl Into<String>, args: Vec<Term>) -> Self {
        let arity = args.len();
        Term::Complex(Functor::new(name, arity), args)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Term::Complex(..))
    }

    /// Collect all variables occurring in this term.
    pub fn variables(&self) -> HashSet<Variable> {
        let mut vars = HashSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        match self {
            Term::Constant(_) => {}
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Complex(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Check if this term contains no variables (is ground).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Constant(_) => true,
            Term::Variable(_) => false,
            Term::Complex(_, args) => args.iter().all(|arg| arg.is_ground()),
        }
    }

    /// `functor/arity` rendering used in shape-mismatch diagnostics.
    ///
    /// For constants and variables this falls back to the term's normal
    /// rendering.
    pub fn shape(&self) -> String {
        match self {
            Term::Complex(f, _) => format!("{}/{}", f.name, f.arity),
            other => other.to_string(),
        }
    }
}

// Display implementations for diagnostics and golden tests

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(n) => write!(f, "{}", n),
            Constant::Atom(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Variable(v) => write!(f, "{}", v),
            Term::Complex(functor, args) => {
                if args.is_empty() {
                    // Zero-arity complex term renders with no argument list
                    write!(f, "{}", functor.name)
                } else {
                    write!(f, "{}(", functor.name)?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_construction() {
        let v = Variable::new("X");
        assert_eq!(v.name, "X");
    }

    #[test]
    fn test_complex_construction_sets_arity() {
        let term = Term::complex("f", vec![Term::var("X"), Term::atom("a")]);
        match term {
            Term::Complex(functor, args) => {
                assert_eq!(functor.name, "f");
                assert_eq!(functor.arity, 2);
                assert_eq!(args.len(), 2);
            }
            _ => panic!("Expected Complex term"),
        }
    }

    #[test]
    fn test_zero_arity_complex() {
        let term = Term::complex("nil", vec![]);
        match &term {
            Term::Complex(functor, args) => {
                assert_eq!(functor.arity, 0);
                assert!(args.is_empty());
            }
            _ => panic!("Expected Complex term"),
        }
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Term::int(8), Term::int(8));
        assert_ne!(Term::int(8), Term::int(9));
        assert_ne!(Term::int(8), Term::atom("8"));
        assert_eq!(Term::var("X"), Term::var("X"));
        assert_ne!(Term::var("X"), Term::var("Y"));
        assert_eq!(
            Term::complex("f", vec![Term::int(1), Term::var("X")]),
            Term::complex("f", vec![Term::int(1), Term::var("X")])
        );
        assert_ne!(
            Term::complex("f", vec![Term::int(1)]),
            Term::complex("g", vec![Term::int(1)])
        );
    }

    #[test]
    fn test_shape_classification() {
        assert!(Term::int(1).is_constant());
        assert!(Term::atom("a").is_constant());
        assert!(Term::var("X").is_variable());
        assert!(Term::complex("f", vec![]).is_complex());
        assert!(!Term::var("X").is_constant());
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::int(8).to_string(), "8");
        assert_eq!(Term::atom("alf").to_string(), "alf");
        assert_eq!(Term::var("X").to_string(), "X");
        assert_eq!(
            Term::complex("foo", vec![Term::int(1), Term::int(2), Term::var("X")]).to_string(),
            "foo(1,2,X)"
        );
        assert_eq!(Term::complex("nil", vec![]).to_string(), "nil");
    }

    #[test]
    fn test_display_nested() {
        let inner = Term::complex("bar", vec![Term::var("X")]);
        let outer = Term::complex("foo", vec![inner, Term::atom("a")]);
        assert_eq!(outer.to_string(), "foo(bar(X),a)");
    }

    #[test]
    fn test_variables_collects_all() {
        let term = Term::complex(
            "f",
            vec![
                Term::var("X"),
                Term::complex("g", vec![Term::var("Y"), Term::var("X")]),
            ],
        );
        let vars = term.variables();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains(&Variable::new("X")));
        assert!(vars.contains(&Variable::new("Y")));
    }

    #[test]
    fn test_is_ground() {
        assert!(Term::int(1).is_ground());
        assert!(!Term::var("X").is_ground());
        assert!(Term::complex("f", vec![Term::atom("a"), Term::int(2)]).is_ground());
        assert!(!Term::complex("f", vec![Term::complex("g", vec![Term::var("X")])]).is_ground());
    }

    #[test]
    fn test_shape() {
        let term = Term::complex("foo", vec![Term::int(1), Term::int(2), Term::int(3)]);
        assert_eq!(term.shape(), "foo/3");
        assert_eq!(Term::atom("a").shape(), "a");
    }
}
