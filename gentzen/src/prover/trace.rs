//! Observers of the proof search. They receive every visited sequent and every chosen witness,
//! and have no influence on the result.

use super::sequent::Sequent;
use crate::ast::Formula;

pub trait SearchObserver {
    /// Called once for every sequent the search visits, after its pending instantiations were
    /// moved to the end of each side.
    fn visit(&mut self, _sequent: &Sequent, _depth: usize) {}

    /// Called before the search tries `candidate` as the witness for `var` in `body`.
    fn witness(&mut self, _var: &str, _body: &Formula, _candidate: &Formula, _depth: usize) {}
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn visit(&mut self, sequent: &Sequent, depth: usize) {
        (**self).visit(sequent, depth);
    }

    fn witness(&mut self, var: &str, body: &Formula, candidate: &Formula, depth: usize) {
        (**self).witness(var, body, candidate, depth);
    }
}

fn visit_line(sequent: &Sequent, depth: usize) -> String {
    format!("{}) {}", depth, sequent)
}

fn witness_line(var: &str, body: &Formula, candidate: &Formula, depth: usize) -> String {
    format!("{}) substitute {} for {} in {}", depth, candidate, var, body)
}

/// Writes the trace to the `log` facade, at the `trace` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn visit(&mut self, sequent: &Sequent, depth: usize) {
        log::trace!("{}", visit_line(sequent, depth));
    }

    fn witness(&mut self, var: &str, body: &Formula, candidate: &Formula, depth: usize) {
        log::trace!("{}", witness_line(var, body, candidate, depth));
    }
}

/// Keeps the trace in memory, one line per event.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    lines: Vec<String>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl SearchObserver for RecordingObserver {
    fn visit(&mut self, sequent: &Sequent, depth: usize) {
        self.lines.push(visit_line(sequent, depth));
    }

    fn witness(&mut self, var: &str, body: &Formula, candidate: &Formula, depth: usize) {
        self.lines.push(witness_line(var, body, candidate, depth));
    }
}
