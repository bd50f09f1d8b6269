/// makes sure traits are implemented
///
/// ```ignore
/// assert_trait!(linked_u32; LinkedSack<u32>; Send, Sync, Clone);
/// ```
#[macro_export]
macro_rules! assert_trait {
    ($name:ident; $to_test:ty; $($trait:ident),*) => {
        $crate::paste::paste! {
            #[test]
            #[allow(elided_lifetimes_in_paths)]
            fn [<implements_ $name:snake>]() {
                $(
                fn [<is_ $trait:snake>]<T: $trait>() {}
                )*
                $([<is_ $trait:snake>]::<$to_test>();)*
            }
        }
    };
}

/// Instantiates a generic test body once per listed sack type.
///
/// `$body` is a generic function `fn body<S>()`; each type gets its own
/// `#[test]` named `<body>_<type>`, with `u32` elements.
#[macro_export]
macro_rules! for_each_impl {
    ($body:ident; $($impl:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$body _ $impl:snake>]() {
                    $body::<$impl<u32>>();
                }
            )+
        }
    };
}
