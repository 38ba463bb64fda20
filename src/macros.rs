//! Node accessor macros
//!
//! Eliminate repetitive match code on the `Node` sum type.
//! Uses `paste` internally for identifier concatenation.

/// Generate is_xxx, as_xxx for enums with typed node variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name,
/// and appends `Node` for the payload type.
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&XxxNode>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // leaf -> Leaf(LeafNode), parent -> Parent(ParentNode)
///     impl_node_accessors!(leaf, parent);
/// }
/// ```
macro_rules! impl_node_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " $variant " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel Node>]> {
                    match self {
                        Self::[<$variant:camel>](v) => {
                            let v: &[<$variant:camel Node>] = v;
                            Some(v)
                        }
                        _ => None,
                    }
                }
            )*
        }
    };
}
