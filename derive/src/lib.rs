//! Derive macro for enums fed by upper-snake wire tokens.
//!
//! Server-driven payloads identify layout components, badges and the like by
//! `SCREAMING_SNAKE_CASE` tokens, and the vocabulary grows without the client
//! shipping first. `#[derive(FromWire)]` turns such an enum declaration into
//! a fallible constructor: each variant name is translated to its wire token
//! (`CarouselSmallProductCard` matches `"CAROUSEL_SMALL_PRODUCT_CARD"`), and
//! a required `Unknown` variant absorbs every token the enum does not know
//! yet.
//! If `Unknown` declares a single `String` field, the unmatched token is kept
//! in it verbatim.
//!
//! ```
//! use wire_enum_derive::FromWire;
//!
//! #[derive(FromWire, Debug, PartialEq)]
//! enum EntityViewType {
//!     Unknown(String),
//!     OneColumnProductCardWithLongTitle,
//!     CarouselSmallProductCard,
//! }
//!
//! assert_eq!(
//!     EntityViewType::from_wire(Some("CAROUSEL_SMALL_PRODUCT_CARD")),
//!     Some(EntityViewType::CarouselSmallProductCard),
//! );
//! assert_eq!(
//!     EntityViewType::from_wire(Some("GRID_BANNER")),
//!     Some(EntityViewType::Unknown("GRID_BANNER".to_owned())),
//! );
//! assert_eq!(EntityViewType::from_wire(None), None);
//! ```

mod context;
mod expand;
mod util;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Error};

use crate::expand::expand_from_wire;

fn to_compile_errors(errors: Vec<syn::Error>) -> proc_macro2::TokenStream {
    let compile_errors = errors.iter().map(Error::to_compile_error);
    quote!(#(#compile_errors)*)
}

#[proc_macro_derive(FromWire)]
pub fn derive_from_wire(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_from_wire(&input)
        .unwrap_or_else(to_compile_errors)
        .into()
}
