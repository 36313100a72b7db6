use indexmap::{IndexMap, IndexSet};
use std::{borrow::Borrow, hash::Hash};

/// Returns `true` if the character may appear in an identifier.
pub fn is_symbol_character(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// An iterator that removes duplicate elements from `iter`. This will yield the elements in
/// `iter` in order, skipping elements that have already been seen before.
pub struct Dedup<T, I> {
    seen: IndexSet<T>,
    iter: I,
}

impl<T, I> Iterator for Dedup<T, I>
where
    T: Clone + Hash + Eq,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let got = self.iter.next()?;
            let is_new = self.seen.insert(got.clone());
            if is_new {
                return Some(got);
            }
        }
    }
}

pub trait DedupIterator<T> {
    /// Creates an iterator that skips duplicate elements.
    fn dedup(self) -> Dedup<T, Self>
    where
        Self: Sized;
}

impl<T, I: Iterator<Item = T>> DedupIterator<T> for I {
    fn dedup(self) -> Dedup<T, Self>
    where
        Self: Sized,
    {
        Dedup { seen: IndexSet::new(), iter: self }
    }
}

/// A stack of hash maps, where lookups search the scopes from innermost to outermost.
#[derive(Debug)]
pub struct HashMapStack<K, V> {
    scopes: Vec<IndexMap<K, V>>,
}

impl<K, V> HashMapStack<K, V> {
    pub fn new() -> Self {
        Self { scopes: vec![IndexMap::new()] }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    pub fn pop_scope(&mut self) {
        match self.scopes.len() {
            0 => unreachable!(),
            1 => panic!("trying to pop last scope in `HashMapStack`"),
            _ => {
                self.scopes.pop();
            }
        }
    }
}

impl<K: Eq + Hash, V> HashMapStack<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.scopes.iter().rev().find_map(|scope| scope.get(key))
    }

    pub fn insert(&mut self, key: K, value: V) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(key, value);
        }
    }
}

impl<K, V> Default for HashMapStack<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup() {
        let got: Vec<_> = [3, 1, 3, 2, 1].into_iter().dedup().collect();
        assert_eq!(got, [3, 1, 2]);
    }

    #[test]
    fn test_hash_map_stack_shadowing() {
        let mut stack = HashMapStack::new();
        stack.insert("x".to_owned(), 0);
        stack.push_scope();
        stack.insert("x".to_owned(), 1);
        assert_eq!(stack.get("x"), Some(&1));
        stack.pop_scope();
        assert_eq!(stack.get("x"), Some(&0));
        assert_eq!(stack.get("y"), None);
    }
}
