use std::hash::Hash;

use hashbrown::HashMap;
use log::debug;
use utils::ord_util::eq_as_multisets;

use crate::{Cursor, Result, SackError};

/// The operations of an unordered collection that allows duplicates.
///
/// Implementors only provide the structural primitives. Every query is
/// derived from [Sack::iter], so all stores agree on what "link order",
/// "frequency" and "equality" mean.
///
/// Element equality is all the trait asks of `T`. Operations that need more
/// (cloning, ordering, hashing) carry the extra bound themselves.
pub trait Sack<T: PartialEq> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// Counter bumped by every structural mutation.
    fn generation(&self) -> u64;

    /// Stores `value`. Always succeeds.
    fn insert(&mut self, value: T);

    /// Removes and returns one unspecified element, `None` when empty.
    fn remove_any(&mut self) -> Option<T>;

    /// Removes the occurrence of `value` closest to the front of the link
    /// order. Returns whether anything was removed.
    fn remove(&mut self, value: &T) -> bool;

    fn clear(&mut self);

    /// Keeps exactly one occurrence of every distinct value: the one met
    /// first in link order.
    fn remove_duplicates(&mut self);

    /// Borrows the elements in link order.
    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` unless it is absent.
    ///
    /// Plain values convert into `Some`, so `sack.add(3)` stores `3` while
    /// `sack.add(None)` is rejected and returns `false`.
    fn add(&mut self, value: impl Into<Option<T>>) -> bool {
        match value.into() {
            Some(value) => {
                self.insert(value);
                true
            }
            None => {
                debug!("rejected an absent value");
                false
            }
        }
    }

    fn frequency_of(&self, value: &T) -> usize {
        self.iter().filter(|e| *e == value).count()
    }

    fn contains(&self, value: &T) -> bool {
        self.iter().any(|e| e == value)
    }

    /// Snapshot of every element in link order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Multiset equality, regardless of how either side stores its elements.
    fn sack_eq<S>(&self, other: &S) -> bool
    where
        T: Ord,
        S: Sack<T> + ?Sized,
    {
        self.len() == other.len() && eq_as_multisets(self.iter(), other.iter())
    }

    /// Adds one more copy of every element currently held.
    ///
    /// Returns `false` on an empty sack. Copies are taken from a snapshot so
    /// that each multiplicity doubles exactly once.
    fn duplicate_all(&mut self) -> bool
    where
        T: Clone,
    {
        if self.is_empty() {
            return false;
        }
        let snapshot = self.to_vec();
        debug!("duplicating {} elements", snapshot.len());
        for value in snapshot {
            self.insert(value);
        }
        true
    }

    /// Frequency of every distinct element, computed in a single pass.
    fn frequencies(&self) -> HashMap<&T, usize>
    where
        T: Hash + Eq,
    {
        let mut counts = HashMap::new();
        for value in self.iter() {
            *counts.entry(value).or_default() += 1;
        }
        counts
    }

    /// A detached position at the front of the sack. See [Cursor].
    fn cursor(&self) -> Cursor {
        Cursor::new(self.generation())
    }

    fn try_add(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        if self.add(value) {
            Ok(())
        } else {
            Err(SackError::Absent)
        }
    }

    fn try_remove(&mut self, value: &T) -> Result<()> {
        if self.remove(value) {
            Ok(())
        } else {
            Err(SackError::NotFound)
        }
    }

    fn try_remove_any(&mut self) -> Result<T> {
        self.remove_any().ok_or(SackError::Empty)
    }

    fn try_duplicate_all(&mut self) -> Result<()>
    where
        T: Clone,
    {
        if self.duplicate_all() {
            Ok(())
        } else {
            Err(SackError::Empty)
        }
    }
}
