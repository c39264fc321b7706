//! Proc macros backing the `hlsl-rs` value types.
use proc_macro::TokenStream;

mod swizzle;

/// Generates swizzle accessors for a vector type.
///
/// An invocation like `swizzle!(Vec2, [x, y])` produces an
/// `impl<T: Copy> Vec2<T>` block containing every 2-, 3- and 4-letter
/// combination of the listed axes as a read accessor (`xx`, `xy`, `yxy`,
/// `xyxy`, ...), each returning the correspondingly sized vector.
///
/// For 2-component vectors the two distinct-letter permutations (`xy`,
/// `yx`) additionally get `set_xy`/`set_yx` write accessors that store the
/// argument's components back into the owning fields in the read order's
/// inverse mapping.
#[proc_macro]
pub fn swizzle(input: TokenStream) -> TokenStream {
    swizzle::swizzle(input)
}
