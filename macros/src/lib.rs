//! This is a proc-macro helper library. Don't use this library directly; use `swizzle-vec`
//! instead.

#![allow(missing_docs, reason = "not intended to be used directly")]

use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;

/// Generates the named swizzle accessor surface for one vector type and one
/// component-name family.
///
/// The input names the vector type and the family's letters in rank order:
///
/// ```rust,ignore
/// swizzle_vec_macros::swizzles!(Vec3, [x, y, z]);
/// ```
///
/// For every ordered combination (with repetition) of 2 to 4 of the given letters,
/// this expands to a pair of methods on the type: a read accessor returning the
/// selected components as a new vector, and a `_mut` accessor returning a writable
/// view over them. The view's const parameters carry the component indices and
/// whether the pattern repeats a component, so a pattern with a repeated component
/// instantiates the view shape that has no assignment interface.
///
/// The macro must be invoked from within the `swizzle-vec` crate; the expansion
/// refers to that crate's types by `crate::` paths.
#[proc_macro]
pub fn swizzles(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let family = syn::parse_macro_input!(input as Family);

    match swizzles_impl(&family) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

// -------------------------------------------------------------------------------------------------

/// Names of the vector struct fields, in component-rank order.
///
/// Family letters are cosmetic; the `k`-th letter of any family always selects the
/// `k`-th field.
const FIELDS: [&str; 4] = ["x", "y", "z", "w"];

/// One `swizzles!` invocation: a vector type plus the letters of a single
/// component-name family, in rank order.
struct Family {
    vector: syn::Ident,
    letters: Vec<syn::Ident>,
}

impl Parse for Family {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let vector = syn::Ident::parse(input)?;
        let _comma: syn::Token![,] = input.parse()?;

        let bracketed;
        syn::bracketed!(bracketed in input);
        let letters: Punctuated<syn::Ident, syn::Token![,]> =
            bracketed.parse_terminated(syn::Ident::parse, syn::Token![,])?;

        Ok(Family {
            vector,
            letters: letters.into_iter().collect(),
        })
    }
}

fn swizzles_impl(family: &Family) -> Result<TokenStream, syn::Error> {
    let dim = family.letters.len();
    if !(2..=4).contains(&dim) {
        return Err(syn::Error::new_spanned(
            &family.vector,
            "a component-name family must list between 2 and 4 letters",
        ));
    }
    for (i, letter) in family.letters.iter().enumerate() {
        if family.letters[..i].contains(letter) {
            return Err(syn::Error::new(
                letter.span(),
                format!("component name `{letter}` appears twice in the family"),
            ));
        }
    }

    let mut methods = TokenStream::new();
    for len in 2..=4usize {
        for pattern in patterns(dim, len) {
            methods.extend(accessor_pair(family, &pattern));
        }
    }

    let vector = &family.vector;
    Ok(quote! {
        impl<T: ::core::marker::Copy> crate::#vector<T> {
            #methods
        }
    })
}

/// Emits the read accessor and the `_mut` view accessor for one pattern.
fn accessor_pair(family: &Family, pattern: &[usize]) -> TokenStream {
    let name = pattern_name(&family.letters, pattern);
    let len = pattern.len();

    let read = syn::Ident::new(&name, Span::call_site());
    let view = format_ident!("{name}_mut");
    let out = format_ident!("Vec{len}");
    let proxy = format_ident!("Swizzle{len}");

    let field: Vec<syn::Ident> = pattern
        .iter()
        .map(|&i| syn::Ident::new(FIELDS[i], Span::call_site()))
        .collect();
    let index: Vec<Literal> = pattern.iter().map(|&i| Literal::usize_unsuffixed(i)).collect();
    let dup = has_duplicate(pattern);

    let read_doc = format!("Returns the `{name}` components of `self` as a new vector.");
    let view_doc = if dup {
        format!(
            "Returns a view of the `{name}` components of `self`. \
             The pattern repeats a component, so the view supports broadcast only."
        )
    } else {
        format!("Returns a writable view of the `{name}` components of `self`.")
    };

    quote! {
        #[doc = #read_doc]
        #[inline]
        #[must_use]
        pub fn #read(&self) -> crate::#out<T> {
            crate::#out::new(#(self.#field),*)
        }

        #[doc = #view_doc]
        #[inline]
        #[must_use]
        pub fn #view(&mut self) -> crate::#proxy<'_, Self, #(#index,)* #dup> {
            crate::#proxy::new(self)
        }
    }
}

/// The accessor name for a pattern: its letters concatenated in pattern order.
fn pattern_name(letters: &[syn::Ident], pattern: &[usize]) -> String {
    pattern.iter().map(|&i| letters[i].to_string()).collect()
}

/// Every ordered selection, with repetition, of `len` ranks out of `dim`.
///
/// Enumerated in odometer order with the leftmost position most significant, so
/// `xx, xy, yx, yy` for a two-letter family.
fn patterns(dim: usize, len: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    let mut current = vec![0usize; len];
    'odometer: loop {
        all.push(current.clone());
        let mut k = len;
        loop {
            if k == 0 {
                break 'odometer;
            }
            k -= 1;
            current[k] += 1;
            if current[k] < dim {
                break;
            }
            current[k] = 0;
        }
    }
    all
}

/// True if the pattern names any source component more than once.
fn has_duplicate(pattern: &[usize]) -> bool {
    pattern
        .iter()
        .enumerate()
        .any(|(i, rank)| pattern[..i].contains(rank))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn family(vector: &str, letters: &[&str]) -> Family {
        Family {
            vector: syn::Ident::new(vector, Span::call_site()),
            letters: letters
                .iter()
                .map(|l| syn::Ident::new(l, Span::call_site()))
                .collect(),
        }
    }

    #[test]
    fn pattern_counts() {
        assert_eq!(patterns(2, 2).len(), 4);
        assert_eq!(patterns(2, 4).len(), 16);
        assert_eq!(patterns(3, 3).len(), 27);
        assert_eq!(patterns(4, 2).len(), 16);
        assert_eq!(patterns(4, 3).len(), 64);
        assert_eq!(patterns(4, 4).len(), 256);
    }

    #[test]
    fn pattern_order_is_odometer() {
        assert_eq!(
            patterns(2, 2),
            [[0, 0], [0, 1], [1, 0], [1, 1]],
        );
    }

    #[test]
    fn duplicate_detection() {
        assert!(!has_duplicate(&[0, 1]));
        assert!(!has_duplicate(&[2, 0, 1]));
        assert!(!has_duplicate(&[3, 2, 1, 0]));
        assert!(has_duplicate(&[0, 0]));
        assert!(has_duplicate(&[0, 1, 0]));
        assert!(has_duplicate(&[0, 1, 2, 1]));
    }

    #[test]
    fn names_follow_the_family_letters() {
        let rgb = family("Vec3", &["r", "g", "b"]);
        assert_eq!(pattern_name(&rgb.letters, &[2, 0]), "br");
        assert_eq!(pattern_name(&rgb.letters, &[0, 1, 2]), "rgb");
    }

    #[test]
    fn expansion_contains_both_accessors() {
        let expansion = swizzles_impl(&family("Vec2", &["x", "y"]))
            .unwrap()
            .to_string();
        assert!(expansion.contains("fn yx"));
        assert!(expansion.contains("fn yx_mut"));
        // A repeated-component pattern instantiates the broadcast-only shape.
        assert!(expansion.contains("fn xx_mut"));
    }

    #[test]
    fn rejects_an_oversized_family() {
        let error = swizzles_impl(&family("Vec5", &["a", "b", "c", "d", "e"])).unwrap_err();
        assert!(error.to_string().contains("between 2 and 4"));
    }

    #[test]
    fn rejects_a_repeated_letter() {
        let error = swizzles_impl(&family("Vec2", &["x", "x"])).unwrap_err();
        assert!(error.to_string().contains("appears twice"));
    }
}
