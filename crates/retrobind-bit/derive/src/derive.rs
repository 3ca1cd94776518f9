use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Largest number of variants that fit into a `u64` mask.
const MAX_VARIANTS: usize = 64;

pub(crate) fn handle_derive_bit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Bit can be derived only for enums",
        ));
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Bit supports only fieldless enum variants",
            ));
        }
        variants.push(&variant.ident);
    }

    if variants.len() > MAX_VARIANTS {
        return Err(syn::Error::new_spanned(
            name,
            "Bit supports at most 64 variants",
        ));
    }

    let count = variants.len() as u32;
    let index_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as u32;
        quote! { #name::#v => #idx }
    });
    let from_index_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as u32;
        quote! { #idx => ::core::option::Option::Some(#name::#v) }
    });

    Ok(quote! {
        impl ::retrobind_bit_mask::Bitable for #name {
            const COUNT: u32 = #count;

            #[inline]
            fn bit(&self) -> u64 {
                1u64 << ::retrobind_bit_mask::Bitable::index(self)
            }

            #[inline]
            fn index(&self) -> u32 {
                match self { #( #index_arms, )* }
            }

            #[inline]
            fn from_index(index: u32) -> ::core::option::Option<Self> {
                match index {
                    #( #from_index_arms, )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
