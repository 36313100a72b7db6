use crate::ast::{Formula, Rc};
use std::fmt;

use super::rules::Branch;

/// One of the two sides of a sequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Antecedent,
    Succedent,
}

/// A formula at some position of a sequent.
///
/// The `duplicated` flag records whether a quantifier at this position was already copied by its
/// introduction rule. It belongs to the occurrence, not to the formula, so branches that share a
/// formula never observe each other's duplications.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub formula: Rc<Formula>,
    pub duplicated: bool,
}

impl Occurrence {
    pub fn new(formula: Rc<Formula>) -> Self {
        Self { formula, duplicated: false }
    }

    pub fn duplicated(formula: Rc<Formula>) -> Self {
        Self { formula, duplicated: true }
    }
}

/// A sequent `antecedent |- succedent`. Each step of the search builds a new sequent instead of
/// modifying an existing one.
#[derive(Debug, Clone, Default)]
pub struct Sequent {
    antecedent: Vec<Occurrence>,
    succedent: Vec<Occurrence>,
}

impl Sequent {
    pub fn new(antecedent: Vec<Rc<Formula>>, succedent: Vec<Rc<Formula>>) -> Self {
        Self {
            antecedent: antecedent.into_iter().map(Occurrence::new).collect(),
            succedent: succedent.into_iter().map(Occurrence::new).collect(),
        }
    }

    /// The sequent `|- formula`, whose validity is the validity of `formula`.
    pub fn query(formula: Rc<Formula>) -> Self {
        Self::new(Vec::new(), vec![formula])
    }

    pub fn side(&self, side: Side) -> &[Occurrence] {
        match side {
            Side::Antecedent => &self.antecedent,
            Side::Succedent => &self.succedent,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Occurrence> {
        match side {
            Side::Antecedent => &mut self.antecedent,
            Side::Succedent => &mut self.succedent,
        }
    }

    /// Every formula in the sequent, antecedent first.
    pub fn formulas(&self) -> impl Iterator<Item = &Rc<Formula>> + '_ {
        self.antecedent
            .iter()
            .chain(&self.succedent)
            .map(|o| &o.formula)
    }

    /// Moves the pending instantiations to the end of each side, keeping the relative order of
    /// everything else.
    pub fn sorted(mut self) -> Self {
        self.antecedent.sort_by_key(|o| o.formula.is_pending());
        self.succedent.sort_by_key(|o| o.formula.is_pending());
        self
    }

    /// Returns `true` if some formula appears on both sides, up to renaming of bound variables.
    pub fn has_axiom(&self) -> bool {
        self.succedent
            .iter()
            .any(|s| self.antecedent.iter().any(|a| a.formula == s.formula))
    }

    /// Returns `true` if every formula in the sequent is a predicate application.
    pub fn is_atomic(&self) -> bool {
        self.formulas().all(|f| f.is_atom())
    }

    /// Builds the successor sequent for one branch of an introduction rule: the occurrence at
    /// `index` is removed from `side`, and the branch's formulas are added to the front of each
    /// side.
    pub fn apply_branch(&self, side: Side, index: usize, branch: &Branch) -> Self {
        let mut next = self.clone();
        next.side_mut(side).remove(index);
        next.antecedent.splice(0..0, branch.antecedent.iter().cloned());
        next.succedent.splice(0..0, branch.succedent.iter().cloned());
        next
    }

    /// Replaces the pending instantiation at `index` of `side` with its resolved body, which is
    /// placed at the front of the same side.
    pub fn instantiate(&self, side: Side, index: usize, resolved: Rc<Formula>) -> Self {
        let mut next = self.clone();
        let formulas = next.side_mut(side);
        formulas.remove(index);
        formulas.insert(0, Occurrence::new(resolved));
        next
    }
}

fn join(occurrences: &[Occurrence]) -> String {
    let formulas: Vec<_> = occurrences.iter().map(|o| o.formula.to_string()).collect();
    formulas.join(", ")
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.antecedent.is_empty() {
            write!(f, "{} ", join(&self.antecedent))?;
        }
        write!(f, "|-")?;
        if !self.succedent.is_empty() {
            write!(f, " {}", join(&self.succedent))?;
        }
        Ok(())
    }
}
