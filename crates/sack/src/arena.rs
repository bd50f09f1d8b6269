use std::{fmt, iter::FusedIterator, mem};

use log::trace;

use crate::Sack;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

/// A sack whose chain lives in a slot vector.
///
/// Links are slot indices instead of boxes. Freed slots are threaded into a
/// free list and reused by later insertions, so a sack that keeps a steady
/// size stops allocating. Link order and every observable behaviour match
/// [LinkedSack](crate::LinkedSack).
#[derive(Clone)]
pub struct ArenaSack<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    free: Option<usize>,
    size: usize,
    generation: u64,
}

impl<T> ArenaSack<T> {
    pub const fn new() -> Self {
        ArenaSack {
            slots: Vec::new(),
            head: None,
            free: None,
            size: 0,
            generation: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArenaSack {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of elements the sack can hold without reallocating, free
    /// slots included.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
            remaining: self.size,
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn occupied(&self, index: usize) -> (&T, Option<usize>) {
        match &self.slots[index] {
            Slot::Occupied { value, next } => (value, *next),
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    fn set_next(&mut self, index: usize, to: Option<usize>) {
        match &mut self.slots[index] {
            Slot::Occupied { next, .. } => *next = to,
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    fn push_front(&mut self, value: T) {
        let slot = Slot::Occupied {
            value,
            next: self.head,
        };
        let index = match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index], slot) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied { .. } => unreachable!("slot {index} is free but occupied"),
                }
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.head = Some(index);
        self.size += 1;
        self.touch();
    }

    /// Unlinks the slot at `index`, whose predecessor in link order is
    /// `prev`, and returns its value.
    fn unlink(&mut self, prev: Option<usize>, index: usize) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let (value, next) = match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { value, next } => (value, next),
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        };
        self.free = Some(index);
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        self.size -= 1;
        self.touch();
        value
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }
}

impl<T: PartialEq> Sack<T> for ArenaSack<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.size
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn insert(&mut self, value: T) {
        self.push_front(value);
        trace!("arena sack grew to {} ({} slots)", self.size, self.slots.len());
    }

    fn remove_any(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn remove(&mut self, value: &T) -> bool {
        let mut prev = None;
        let mut current = self.head;
        while let Some(index) = current {
            let (candidate, next) = self.occupied(index);
            if candidate == value {
                self.unlink(prev, index);
                trace!("removed slot {index}");
                return true;
            }
            prev = Some(index);
            current = next;
        }
        false
    }

    fn clear(&mut self) {
        if self.size > 0 {
            self.slots.clear();
            self.head = None;
            self.free = None;
            self.size = 0;
            self.touch();
        }
    }

    fn remove_duplicates(&mut self) {
        let before = self.size;
        let mut current = self.head;
        while let Some(kept) = current {
            let mut prev = kept;
            let mut runner = self.occupied(kept).1;
            while let Some(index) = runner {
                let (candidate, next) = self.occupied(index);
                if candidate == self.occupied(kept).0 {
                    self.unlink(Some(prev), index);
                } else {
                    prev = index;
                }
                runner = next;
            }
            current = self.occupied(kept).1;
        }
        trace!("removed {} duplicates, {} left", before - self.size, self.size);
    }

    fn iter(&self) -> Iter<'_, T> {
        ArenaSack::iter(self)
    }
}

impl<T> Default for ArenaSack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaSack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> PartialEq for ArenaSack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sack_eq(other)
    }
}

impl<T: Ord> Eq for ArenaSack<T> {}

impl<T> Extend<T> for ArenaSack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_front(value);
        }
    }
}

impl<T> FromIterator<T> for ArenaSack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut ret = Self::with_capacity(iter.size_hint().0);
        ret.extend(iter);
        ret
    }
}

/// Borrowing iterator over an [ArenaSack], in link order.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let slots = self.slots;
        match &slots[index] {
            Slot::Occupied { value, next } => {
                self.next = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("slot {index} is linked but vacant"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a ArenaSack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(ArenaSack<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArenaSack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
