//! The allocator for fresh symbol names.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The prefix of eigenvariables, fresh variables that may be instantiated several times.
pub const EIGENVARIABLE_PREFIX: &str = "_v";

/// The prefix of witness constants, fresh symbols introduced by a one-shot quantifier
/// elimination.
pub const WITNESS_CONSTANT_PREFIX: &str = "_c";

/// A source of globally unique symbol names.
///
/// All names share a single monotonically increasing counter, so an eigenvariable and a witness
/// constant never receive the same index. The counter is atomic, which allows one allocator to be
/// shared by reference between threads without ever handing out the same name twice.
#[derive(Debug, Default)]
pub struct FreshNames {
    counter: AtomicUsize,
}

impl FreshNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh eigenvariable name, e.g. `_v7`.
    pub fn eigenvariable(&self) -> String {
        format!("{}{}", EIGENVARIABLE_PREFIX, self.next_index())
    }

    /// Returns a fresh witness constant name, e.g. `_c7`.
    pub fn witness_constant(&self) -> String {
        format!("{}{}", WITNESS_CONSTANT_PREFIX, self.next_index())
    }

    /// Returns a fresh name to replace the bound variable `name`. Eigenvariables are renamed to
    /// eigenvariables; every other name is renamed to a witness constant.
    pub fn rename(&self, name: &str) -> String {
        if name.starts_with(EIGENVARIABLE_PREFIX) {
            self.eigenvariable()
        } else {
            self.witness_constant()
        }
    }

    /// The number of names issued so far.
    pub fn issued(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }

    fn next_index(&self) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_names_share_one_counter() {
        let names = FreshNames::new();
        assert_eq!(names.eigenvariable(), "_v1");
        assert_eq!(names.witness_constant(), "_c2");
        assert_eq!(names.rename("_v1"), "_v3");
        assert_eq!(names.rename("x"), "_c4");
        assert_eq!(names.rename("_c2"), "_c5");
        assert_eq!(names.issued(), 5);
    }

    #[test]
    fn test_names_are_unique_across_threads() {
        let names = FreshNames::new();
        let mut all: Vec<String> = thread::scope(|s| {
            let workers: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..100).map(|_| names.eigenvariable()).collect::<Vec<_>>()))
                .collect();
            workers.into_iter().flat_map(|w| w.join().unwrap()).collect()
        });
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
