use std::{fmt, iter::FusedIterator};

use log::trace;

use crate::Sack;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A sack stored as a singly-linked chain.
///
/// Every node owns the remainder of the chain and the sack owns the first
/// node. New elements are put in front, so [Sack::remove_any] hands back the
/// most recent one in constant time.
pub struct LinkedSack<T> {
    head: Link<T>,
    size: usize,
    generation: u64,
}

impl<T> LinkedSack<T> {
    pub const fn new() -> Self {
        LinkedSack {
            head: None,
            size: 0,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.size == 0, self.head.is_none());
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.size += 1;
        self.touch();
    }

    fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.size -= 1;
        self.touch();
        Some(value)
    }

    /// The link that owns the node at `index`, or the terminal link.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Drops the chain one node at a time so long chains do not recurse.
    fn drop_chain(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }
}

impl<T: PartialEq> Sack<T> for LinkedSack<T> {
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
        trace!("linked sack grew to {}", self.size);
    }

    fn remove_any(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.iter().position(|e| e == value) else {
            return false;
        };
        let link = self.link_at(index);
        let Some(node) = link.take() else {
            return false;
        };
        *link = node.next;
        self.size -= 1;
        self.touch();
        trace!("removed the element at {index}");
        true
    }

    fn clear(&mut self) {
        if self.head.is_some() {
            self.drop_chain();
            self.touch();
        }
    }

    fn remove_duplicates(&mut self) {
        let mut removed = 0;
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            let mut link = &mut node.next;
            while let Some(mut candidate) = link.take() {
                if candidate.value == node.value {
                    *link = candidate.next.take();
                    removed += 1;
                } else {
                    link = &mut link.insert(candidate).next;
                }
            }
            current = node.next.as_deref_mut();
        }
        if removed > 0 {
            self.size -= removed;
            self.touch();
        }
        trace!("removed {removed} duplicates, {} left", self.size);
    }

    fn iter(&self) -> Iter<'_, T> {
        LinkedSack::iter(self)
    }
}

impl<T> Default for LinkedSack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedSack<T> {
    fn drop(&mut self) {
        self.drop_chain();
    }
}

impl<T: Clone> Clone for LinkedSack<T> {
    fn clone(&self) -> Self {
        let values: Vec<_> = self.iter().collect();
        let mut ret = Self::new();
        for value in values.into_iter().rev() {
            ret.push_front(value.clone());
        }
        ret
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Multiset equality. Requires an ordering on `T`, see [Sack::sack_eq].
impl<T: Ord> PartialEq for LinkedSack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sack_eq(other)
    }
}

impl<T: Ord> Eq for LinkedSack<T> {}

impl<T> Extend<T> for LinkedSack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_front(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

/// Borrowing iterator over a [LinkedSack], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
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
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedSack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, empties the sack from the front.
pub struct IntoIter<T>(LinkedSack<T>);

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

impl<T> IntoIterator for LinkedSack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
