//! A decision procedure for first-order validity, by backwards proof search in a sequent
//! calculus.
//!
//! The search starts from the sequent `|- formula` and repeatedly introduces the first
//! decomposable formula it finds, or resolves the first pending instantiation, until it reaches an
//! axiom (some formula on both sides) or a sequent where no rule applies. Quantifiers on their
//! duplicable side are first copied, and then turned into pending instantiations, whose witnesses
//! are guessed by a [`WitnessStrategy`].

mod error;
pub mod rules;
mod sequent;
mod trace;
mod witness;

pub use error::{SearchError, SearchResult};
pub use sequent::{Occurrence, Sequent, Side};
pub use trace::{LogObserver, RecordingObserver, SearchObserver};
pub use witness::{Candidate, HeuristicWitnesses, WitnessStrategy};

use crate::ast::{Formula, FreshNames, Rc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Config {
    max_depth: Option<usize>,
    max_steps: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: Some(256),
            max_steps: Some(200_000),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum nesting depth of the search. `None` means no limit.
    pub fn max_depth(mut self, value: impl Into<Option<usize>>) -> Self {
        self.max_depth = value.into();
        self
    }

    /// The maximum number of sequents visited by one search. `None` means no limit.
    pub fn max_steps(mut self, value: impl Into<Option<usize>>) -> Self {
        self.max_steps = value.into();
        self
    }

    /// Removes both limits. The search may then fail to terminate.
    pub fn unbounded(self) -> Self {
        self.max_depth(None).max_steps(None)
    }
}

/// The outcome of a proof search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,

    /// The search exhausted its budget before reaching a verdict.
    Inconclusive(SearchError),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        *self == Verdict::Valid
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
            Verdict::Inconclusive(e) => write!(f, "inconclusive ({})", e),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of sequents visited.
    pub visited: usize,

    /// The deepest nesting reached.
    pub max_depth: usize,

    /// The number of witnesses substituted into pending instantiations.
    pub witnesses_tried: usize,
}

pub struct Prover<'a> {
    names: &'a FreshNames,
    config: Config,
    strategy: Box<dyn WitnessStrategy + 'a>,
    observer: Box<dyn SearchObserver + 'a>,
    stats: SearchStatistics,
}

impl<'a> Prover<'a> {
    /// Constructs a new `Prover`, that draws fresh symbols from `names`. By default, witnesses are
    /// chosen by `HeuristicWitnesses`, and the search trace goes to the `log` facade.
    pub fn new(names: &'a FreshNames, config: Config) -> Self {
        Self {
            names,
            config,
            strategy: Box::new(HeuristicWitnesses),
            observer: Box::new(LogObserver),
            stats: SearchStatistics::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl WitnessStrategy + 'a) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Replaces the observer that receives the search trace. Passing a `&mut` reference allows
    /// inspecting the observer after the search.
    pub fn with_observer(mut self, observer: impl SearchObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Statistics of the last search.
    pub fn statistics(&self) -> SearchStatistics {
        self.stats
    }

    /// Decides whether `formula` is valid.
    pub fn prove(&mut self, formula: &Rc<Formula>) -> Verdict {
        self.prove_sequent(Sequent::query(formula.clone()))
    }

    /// Decides whether `sequent` is valid, that is, whether the conjunction of its antecedent
    /// implies the disjunction of its succedent.
    pub fn prove_sequent(&mut self, sequent: Sequent) -> Verdict {
        self.stats = SearchStatistics::default();
        let verdict = match self.search(sequent, false, 0) {
            Ok(true) => Verdict::Valid,
            Ok(false) => Verdict::Invalid,
            Err(e) => {
                log::warn!("giving up on proof search: {}", e);
                Verdict::Inconclusive(e)
            }
        };
        log::debug!(
            "proof search finished: {} ({} sequents visited, maximum depth {}, {} witnesses tried)",
            verdict,
            self.stats.visited,
            self.stats.max_depth,
            self.stats.witnesses_tried,
        );
        verdict
    }

    fn search(&mut self, sequent: Sequent, exists_mode: bool, depth: usize) -> SearchResult<bool> {
        self.stats.visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if let Some(limit) = self.config.max_steps {
            if self.stats.visited > limit {
                return Err(SearchError::StepBudgetExceeded { limit });
            }
        }
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(SearchError::DepthExceeded { limit });
            }
        }

        let sequent = sequent.sorted();
        self.observer.visit(&sequent, depth);

        if sequent.has_axiom() {
            return Ok(true);
        }
        for side in [Side::Antecedent, Side::Succedent] {
            if let Some(result) = self.scan_side(&sequent, side, exists_mode, depth)? {
                return Ok(result);
            }
        }

        // No rule applies to any formula in the sequent
        Ok(!(exists_mode || sequent.is_atomic()))
    }

    /// Applies a rule to the first formula of `side` that admits one. Returns `None` if there is
    /// no such formula, or if every such formula failed while in existential mode.
    fn scan_side(
        &mut self,
        sequent: &Sequent,
        side: Side,
        exists_mode: bool,
        depth: usize,
    ) -> SearchResult<Option<bool>> {
        for (index, occurrence) in sequent.side(side).iter().enumerate() {
            if let Formula::Pending(_, var, body) = occurrence.formula.as_ref() {
                let target = PendingTarget { side, index, var, body };
                return self.resolve_pending(sequent, target, exists_mode, depth).map(Some);
            }

            let branches = match side {
                Side::Antecedent => rules::introduce_in_antecedent(occurrence, self.names),
                Side::Succedent => rules::introduce_in_succedent(occurrence, self.names),
            };
            let Some(branches) = branches else {
                continue;
            };

            let mut all_valid = true;
            for branch in &branches {
                let next = sequent.apply_branch(side, index, branch);
                if !self.search(next, exists_mode, depth + 1)? {
                    all_valid = false;
                    break;
                }
            }
            if all_valid {
                return Ok(Some(true));
            } else if !exists_mode {
                return Ok(Some(false));
            }
        }
        Ok(None)
    }

    /// Tries the candidate witnesses for a pending instantiation.
    ///
    /// On the antecedent, the successors are searched in the same mode as the current sequent. In
    /// universal mode every witness must succeed, and in existential mode one success is enough;
    /// if no witness decides the result, the sequent is valid. On the succedent, the successors
    /// are searched in existential mode, one success is enough, and otherwise the sequent is
    /// invalid.
    fn resolve_pending(
        &mut self,
        sequent: &Sequent,
        target: PendingTarget,
        exists_mode: bool,
        depth: usize,
    ) -> SearchResult<bool> {
        let PendingTarget { side, index, var, body } = target;
        let (child_mode, all_required) = match side {
            Side::Antecedent => (exists_mode, !exists_mode),
            Side::Succedent => (true, false),
        };

        let mut reused = false;
        for candidate in self.strategy.candidates(var, sequent) {
            // When every witness must succeed, the fresh symbol is only tried if no term was
            // reused before it
            if all_required && reused && candidate == Candidate::Fresh {
                continue;
            }
            reused |= matches!(candidate, Candidate::Reuse(_));

            let (witness, resolved) = candidate.instantiate(var, body, self.names);
            self.stats.witnesses_tried += 1;
            self.observer.witness(var, body, &witness, depth);

            let next = sequent.instantiate(side, index, resolved);
            let valid = self.search(next, child_mode, depth + 1)?;
            match side {
                Side::Antecedent if all_required && !valid => return Ok(false),
                Side::Antecedent if exists_mode && valid => return Ok(true),
                Side::Succedent if valid => return Ok(true),
                _ => (),
            }
        }
        Ok(side == Side::Antecedent)
    }
}

/// A pending instantiation at some position of a sequent.
struct PendingTarget<'f> {
    side: Side,
    index: usize,
    var: &'f str,
    body: &'f Rc<Formula>,
}
