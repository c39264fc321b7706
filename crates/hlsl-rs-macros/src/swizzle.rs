//! Swizzle implementation macro.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};

/// Parses macro input like `Vec2, [x, y]`.
struct Swizzling {
    ty: syn::Ident,
    axes: Vec<syn::Ident>,
}

impl Parse for Swizzling {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty = syn::Ident::parse(input)?;
        let _comma = <syn::Token![,]>::parse(input)?;

        let bracketed;
        syn::bracketed!(bracketed in input);
        let axes: Vec<syn::Ident> =
            syn::punctuated::Punctuated::<syn::Ident, syn::Token![,]>::parse_terminated(
                &bracketed,
            )?
            .into_iter()
            .collect();

        if !(2..=4).contains(&axes.len()) {
            return Err(syn::Error::new(
                input.span(),
                "swizzle! expects between 2 and 4 axis letters",
            ));
        }

        Ok(Swizzling { ty, axes })
    }
}

/// Every `len`-letter combination (with repetition) of `axes`, in
/// lexicographic axis order.
fn combinations(axes: &[syn::Ident], len: usize) -> Vec<Vec<syn::Ident>> {
    let n = axes.len();
    let total = n.pow(len as u32);
    let mut out = Vec::with_capacity(total);
    for mut index in 0..total {
        let mut combo = Vec::with_capacity(len);
        for _ in 0..len {
            combo.push(axes[index % n].clone());
            index /= n;
        }
        combo.reverse();
        out.push(combo);
    }
    out
}

pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    let Swizzling { ty, axes } = syn::parse_macro_input!(token_stream);

    // Output field names by position, shared by all vector arities.
    let fields = ["x", "y", "z", "w"];

    let mut methods = proc_macro2::TokenStream::new();
    for len in 2..=4usize {
        let out_ty = format_ident!("Vec{}", len);
        for combo in combinations(&axes, len) {
            let name = format_ident!(
                "{}",
                combo
                    .iter()
                    .map(|axis| axis.to_string())
                    .collect::<String>()
            );
            let doc = format!("The `{name}` swizzle of this vector.");
            let assignments = combo.iter().enumerate().map(|(position, axis)| {
                let field = format_ident!("{}", fields[position]);
                quote! { #field: self.#axis }
            });
            methods.extend(quote! {
                #[doc = #doc]
                #[inline]
                pub fn #name(self) -> #out_ty<T> {
                    #out_ty {
                        #(#assignments),*
                    }
                }
            });
        }
    }

    // 2-component vectors also expose write accessors for the two-letter
    // permutations of their own axes: the argument's components are stored
    // back through the inverse of the read mapping.
    let mut setters = proc_macro2::TokenStream::new();
    if axes.len() == 2 {
        for combo in [[0usize, 1], [1, 0]] {
            let letters: Vec<&syn::Ident> = combo.iter().map(|&i| &axes[i]).collect();
            let name = format_ident!(
                "set_{}{}",
                letters[0].to_string(),
                letters[1].to_string()
            );
            let doc = format!(
                "Stores `v` back through the `{}{}` swizzle.",
                letters[0], letters[1]
            );
            let assignments = letters.iter().enumerate().map(|(position, axis)| {
                let field = format_ident!("{}", fields[position]);
                quote! { self.#axis = v.#field; }
            });
            setters.extend(quote! {
                #[doc = #doc]
                #[inline]
                pub fn #name(&mut self, v: Vec2<T>) {
                    #(#assignments)*
                }
            });
        }
    }

    quote! {
        impl<T: Copy> #ty<T> {
            #methods
            #setters
        }
    }
    .into()
}
