//! Equality of formulas modulo renaming of bound variables.
//!
//! The comparison never renames or otherwise touches either operand. Instead, it keeps track of
//! which binder each bound variable belongs to while walking both trees in lockstep, so it is
//! safe to compare formulas that are shared between several positions of a sequent.

use super::{Formula, Rc};
use crate::utils::HashMapStack;
use std::hash::{Hash, Hasher};

/// Returns `true` if `a` and `b` are equal up to renaming of bound variables.
pub fn alpha_equiv(a: &Formula, b: &Formula) -> bool {
    AlphaEquivalenceChecker::new().eq(a, b)
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        alpha_equiv(self, other)
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    // This must agree with alpha-equivalence, so the body of a binder is never hashed: the names
    // of the variables it binds are irrelevant for equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Formula::Term(name, args) => {
                name.hash(state);
                args.hash(state);
            }
            Formula::Atom(name, args) => {
                name.hash(state);
                args.hash(state);
            }
            Formula::Not(a) => a.hash(state),
            Formula::Connective(c, l, r) => {
                c.hash(state);
                l.hash(state);
                r.hash(state);
            }
            Formula::Quant(q, _, _) | Formula::Pending(q, _, _) => q.hash(state),
        }
    }
}

struct AlphaEquivalenceChecker {
    // Each bound variable is mapped to the index of its binder, counting binders from the root.
    // Two variables are alpha-equivalent if they are both free and have the same name, or if they
    // are both bound by binders with the same index.
    indices: (HashMapStack<String, usize>, HashMapStack<String, usize>),
    depth: usize,
}

impl AlphaEquivalenceChecker {
    fn new() -> Self {
        Self {
            indices: (HashMapStack::new(), HashMapStack::new()),
            depth: 0,
        }
    }

    fn eq(&mut self, a: &Formula, b: &Formula) -> bool {
        match (a, b) {
            (Formula::Term(a, None), Formula::Term(b, None)) => self.check(a, b),
            (Formula::Term(f_a, Some(args_a)), Formula::Term(f_b, Some(args_b)))
            | (Formula::Atom(f_a, args_a), Formula::Atom(f_b, args_b)) => {
                f_a == f_b && self.eq_args(args_a, args_b)
            }
            (Formula::Not(a), Formula::Not(b)) => self.eq(a, b),
            (Formula::Connective(c_a, l_a, r_a), Formula::Connective(c_b, l_b, r_b)) => {
                c_a == c_b && self.eq(l_a, l_b) && self.eq(r_a, r_b)
            }
            (Formula::Quant(q_a, x_a, a), Formula::Quant(q_b, x_b, b))
            | (Formula::Pending(q_a, x_a, a), Formula::Pending(q_b, x_b, b)) => {
                q_a == q_b && self.check_binder(x_a, x_b, a, b)
            }
            _ => false,
        }
    }

    fn eq_args(&mut self, a: &[Rc<Formula>], b: &[Rc<Formula>]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(a, b)| self.eq(a, b))
    }

    fn check_binder(&mut self, x_a: &str, x_b: &str, a: &Formula, b: &Formula) -> bool {
        self.indices.0.push_scope();
        self.indices.1.push_scope();
        self.indices.0.insert(x_a.to_owned(), self.depth);
        self.indices.1.insert(x_b.to_owned(), self.depth);
        self.depth += 1;

        let result = self.eq(a, b);

        self.depth -= 1;
        self.indices.0.pop_scope();
        self.indices.1.pop_scope();
        result
    }

    fn check(&self, a: &str, b: &str) -> bool {
        match (self.indices.0.get(a), self.indices.1.get(b)) {
            // If both a and b are free variables, they need to have the same name
            (None, None) => a == b,

            // If they are both bound variables, they need to be bound by the same binder
            (Some(a), Some(b)) => a == b,

            // If one of them is bound and the other is free, they are not equal
            _ => false,
        }
    }
}
