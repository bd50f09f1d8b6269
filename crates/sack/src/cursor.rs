use log::trace;

use crate::{Result, Sack, SackError};

/// Iteration state that does not borrow the sack.
///
/// A cursor remembers how far it got and the sack's
/// [generation](Sack::generation) when it was created. It is handed the sack
/// again on every step, and fails fast with
/// [SackError::ConcurrentModification] as soon as the sack was structurally
/// modified in between. A failed cursor stays failed: generations never
/// come back.
///
/// Each step walks from the front of the sack, so a full pass over a linked
/// sack is quadratic. Prefer [Sack::iter] whenever a borrow is possible.
///
/// A cursor does not know which sack created it. Using it on another sack is
/// a logic error that is only caught if the generations differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    position: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(generation: u64) -> Self {
        Cursor {
            position: 0,
            generation,
        }
    }

    /// How many elements this cursor has yielded.
    pub fn position(&self) -> usize {
        self.position
    }

    fn check<T, S>(&self, sack: &S) -> Result<()>
    where
        T: PartialEq,
        S: Sack<T> + ?Sized,
    {
        let found = sack.generation();
        if found == self.generation {
            Ok(())
        } else {
            trace!(
                "stale cursor at {}: generation {} -> {found}",
                self.position,
                self.generation
            );
            Err(SackError::ConcurrentModification {
                expected: self.generation,
                found,
            })
        }
    }

    pub fn has_next<T, S>(&self, sack: &S) -> Result<bool>
    where
        T: PartialEq,
        S: Sack<T> + ?Sized,
    {
        self.check(sack)?;
        Ok(self.position < sack.len())
    }

    /// Yields the next element, or `Ok(None)` once the sack is exhausted.
    pub fn advance<'s, T, S>(&mut self, sack: &'s S) -> Result<Option<&'s T>>
    where
        T: PartialEq + 's,
        S: Sack<T> + ?Sized,
    {
        self.check(sack)?;
        let next = sack.iter().nth(self.position);
        if next.is_some() {
            self.position += 1;
        }
        Ok(next)
    }
}
