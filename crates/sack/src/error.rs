use thiserror::Error;

/// Expected failure outcomes of sack operations.
///
/// None of these are fatal: the plain operations report them as `false` or
/// `None`, the `try_*` variants and [Cursor](crate::Cursor) report them
/// through this type so they compose with `?`.
#[derive(Debug, Error, Ord, Eq, PartialEq, PartialOrd, Clone, Copy, Hash)]
pub enum SackError {
    #[error("a sack cannot hold an absent value")]
    Absent,
    #[error("no matching element in the sack")]
    NotFound,
    #[error("the sack is empty")]
    Empty,
    #[error(
        "the sack was structurally modified while a cursor walked it (generation {expected:}, now {found:})"
    )]
    ConcurrentModification { expected: u64, found: u64 },
}

pub type Result<A> = std::result::Result<A, SackError>;
