mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bit;

/// Implements `retrobind_bit_mask::Bitable` for a fieldless enum.
///
/// Variants are numbered in declaration order, starting at zero.
#[proc_macro_derive(Bit)]
pub fn derive_bit(input: TokenStream) -> TokenStream {
    handle_derive_bit(input)
}
