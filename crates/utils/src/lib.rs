/// Shorthand for an argument that accepts anything iterable over `$t`
#[macro_export]
macro_rules! implvec {
    ($t:ty) => {
        impl std::iter::IntoIterator<Item = $t>
    };
}

pub mod ord_util;
pub mod test_utils;

#[doc(hidden)]
pub use paste;
