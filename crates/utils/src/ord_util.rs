use itertools::Itertools;

/// Compares two collections as multisets: both sides are sorted and then
/// walked in lockstep.
///
/// The caller is expected to have compared the lengths first when it knows
/// them, this function does not short-circuit on size.
pub fn eq_as_multisets<'a, A>(a: implvec!(&'a A), b: implvec!(&'a A)) -> bool
where
    A: Ord + 'a,
{
    a.into_iter().sorted().eq(b.into_iter().sorted())
}
