//! An unordered multiset ("sack").
//!
//! A sack holds any number of elements, duplicates included, and promises no
//! order between them. Two stores are provided behind the same [Sack] trait:
//!
//! - [LinkedSack], a singly-linked chain where every node owns the rest of
//!   the chain;
//! - [ArenaSack], the same chain laid out in a slot vector with a free list.
//!
//! ```
//! use sack::{LinkedSack, Sack};
//!
//! let mut sack: LinkedSack<u32> = LinkedSack::new();
//! sack.add(5);
//! sack.add(3);
//! sack.add(5);
//! assert_eq!(sack.frequency_of(&5), 2);
//!
//! sack.remove_duplicates();
//! assert_eq!(sack.len(), 2);
//! ```
//!
//! A sack is not synchronised. Borrowing rules keep an [Iter](linked::Iter)
//! from observing a mutation; a [Cursor] is the detached alternative and
//! reports [SackError::ConcurrentModification] instead.

pub mod arena;
pub mod cursor;
pub mod error;
pub mod linked;
mod traits;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use arena::ArenaSack;
pub use cursor::Cursor;
pub use error::{Result, SackError};
pub use linked::LinkedSack;
pub use traits::Sack;
