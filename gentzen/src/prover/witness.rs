//! Witness enumeration for pending instantiations.

use super::sequent::Sequent;
use crate::{
    ast::{Formula, FreshNames, Rc, Substitution},
    utils::DedupIterator,
};
use std::iter;

/// A candidate witness for the bound variable of a pending instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A term that already occurs in the sequent.
    Reuse(Rc<Formula>),

    /// A fresh symbol, obtained by renaming the bound variable itself.
    Fresh,
}

impl Candidate {
    /// Substitutes this candidate for `var` in `body`. Returns the chosen witness term, together
    /// with the resolved formula.
    pub fn instantiate(
        &self,
        var: &str,
        body: &Rc<Formula>,
        names: &FreshNames,
    ) -> (Rc<Formula>, Rc<Formula>) {
        let witness = match self {
            Candidate::Reuse(term) => term.clone(),
            Candidate::Fresh => Formula::var(names.rename(var)),
        };
        let resolved = Substitution::new(var, witness.clone()).apply(names, body);
        (witness, resolved)
    }
}

/// A strategy for choosing the witnesses tried when resolving a pending instantiation.
///
/// The search tries the candidates in the order they are returned, so a strategy must be
/// deterministic for the search to be reproducible.
pub trait WitnessStrategy {
    /// Returns the candidates for the variable `var`, bound by a pending instantiation in
    /// `sequent`.
    fn candidates(&self, var: &str, sequent: &Sequent) -> Vec<Candidate>;
}

/// The default strategy: every distinct term in the sequent, followed by a fresh symbol.
///
/// Terms are collected in order of appearance, scanning the antecedent and then the succedent,
/// and each term is visited before its arguments. Terms that mention a variable bound by an
/// enclosing quantifier or pending instantiation are skipped, since they mean nothing outside of
/// their binder.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicWitnesses;

impl WitnessStrategy for HeuristicWitnesses {
    fn candidates(&self, _: &str, sequent: &Sequent) -> Vec<Candidate> {
        let mut terms = Vec::new();
        for formula in sequent.formulas() {
            collect_terms(formula, &mut Vec::new(), &mut terms);
        }
        terms
            .into_iter()
            .dedup()
            .map(Candidate::Reuse)
            .chain(iter::once(Candidate::Fresh))
            .collect()
    }
}

fn collect_terms(formula: &Rc<Formula>, bound: &mut Vec<String>, acc: &mut Vec<Rc<Formula>>) {
    match formula.as_ref() {
        Formula::Term(_, args) => {
            if formula.free_vars().iter().all(|v| !bound.contains(v)) {
                acc.push(formula.clone());
            }
            for a in args.iter().flatten() {
                collect_terms(a, bound, acc);
            }
        }
        Formula::Atom(_, args) => {
            for a in args {
                collect_terms(a, bound, acc);
            }
        }
        Formula::Not(a) => collect_terms(a, bound, acc),
        Formula::Connective(_, l, r) => {
            collect_terms(l, bound, acc);
            collect_terms(r, bound, acc);
        }
        Formula::Quant(_, var, body) | Formula::Pending(_, var, body) => {
            bound.push(var.clone());
            collect_terms(body, bound, acc);
            bound.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::parse_formula;

    fn candidates(antecedent: &[&str], succedent: &[&str]) -> Vec<String> {
        let parse_all = |s: &[&str]| -> Vec<_> { s.iter().map(|f| parse_formula(f)).collect() };
        let sequent = Sequent::new(parse_all(antecedent), parse_all(succedent));
        HeuristicWitnesses
            .candidates("x", &sequent)
            .into_iter()
            .map(|c| match c {
                Candidate::Reuse(t) => t.to_string(),
                Candidate::Fresh => "<fresh>".to_owned(),
            })
            .collect()
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(candidates(&[], &["p"]), ["<fresh>"]);
        assert_eq!(
            candidates(&["p(a, f(b))"], &["q(c)"]),
            ["a", "f(b)", "b", "c", "<fresh>"],
        );
        assert_eq!(
            candidates(&["p(a)", "q(a)"], &["r(g(a), a)"]),
            ["a", "g(a)", "<fresh>"],
        );
    }

    #[test]
    fn test_bound_terms_are_skipped() {
        assert_eq!(
            candidates(&["+ y p(y, f(y), g(c))"], &[]),
            ["g(c)", "c", "<fresh>"],
        );
        assert_eq!(
            candidates(&[r"(! y q(y)) /\ q(y)"], &[]),
            ["y", "<fresh>"],
        );
    }

    #[test]
    fn test_instantiate() {
        let names = FreshNames::new();
        let body = parse_formula("p(x, y)");

        let (witness, resolved) =
            Candidate::Reuse(Formula::var("c")).instantiate("x", &body, &names);
        assert_eq!(witness.to_string(), "c");
        assert_eq!(resolved.to_string(), "p(c, y)");

        let (witness, resolved) = Candidate::Fresh.instantiate("_v7", &body, &names);
        assert_eq!(witness.to_string(), "_v1");
        assert_eq!(resolved.to_string(), "p(x, y)");

        let (witness, resolved) = Candidate::Fresh.instantiate("x", &body, &names);
        assert_eq!(witness.to_string(), "_c2");
        assert_eq!(resolved.to_string(), "p(_c2, y)");
    }
}
