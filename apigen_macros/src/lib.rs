//! Proc-macro companion for `apigen`.
//!
//! The generator reads `#[api_validator("...")]` field attributes purely
//! syntactically, so it never needs this crate. Annotated declaration files
//! do: Rust rejects unknown field attributes unless a derive registers them
//! as helpers. `#[derive(ApiValidator)]` is that registration and nothing
//! else; it expands to an empty token stream.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Registers the `api_validator` helper attribute on a parameter struct.
///
/// ```ignore
/// #[derive(ApiValidator)]
/// pub struct CreateParams {
///     #[api_validator("required,min=10")]
///     pub login: String,
/// }
/// ```
#[proc_macro_derive(ApiValidator, attributes(api_validator))]
pub fn derive_api_validator(input: TokenStream) -> TokenStream {
    let _input = parse_macro_input!(input as DeriveInput);
    quote! {}.into()
}
