//! Demonstration: answering a Prolog-ish query by unification alone.
//!
//! A single fact `parent(tom, sally)` is matched against the query
//! `parent(X, sally)`, and the resulting bindings are printed.

use termunify::{unify, Term, UnifyError};

fn main() {
    let fact = Term::complex("parent", vec![Term::atom("tom"), Term::atom("sally")]);
    let query = Term::complex("parent", vec![Term::var("X"), Term::atom("sally")]);

    println!("fact:  {}", fact);
    println!("query: {}", query);

    match unify(&query, &fact) {
        Ok(bindings) => {
            println!("unified with {}", bindings);
            println!("X = {}", bindings.resolve("X"));
        }
        Err(e) => println!("no: {}", e),
    }

    // A query that cannot match
    let other = Term::complex("parent", vec![Term::var("X"), Term::atom("tim")]);
    match unify(&other, &fact) {
        Ok(bindings) => println!("unified with {}", bindings),
        Err(e @ UnifyError::ConstantsDiffer { .. }) => println!("no: {}", e),
        Err(e) => println!("no (unexpected reason): {}", e),
    }
}
