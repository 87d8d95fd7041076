//! Auto-detection of the runtime crate path for generated code.
//!
//! When `#[describe]` is used from a crate that depends on `docschema_core`
//! directly, the generated code names it directly. When the consuming crate
//! depends on the `docschema` umbrella crate instead, the generated code
//! goes through the umbrella's re-exports.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Crates that expose `FunctionSignature` at their root, in lookup order.
const CANDIDATES: [&str; 2] = ["docschema_core", "docschema"];

/// Returns the token path under which `FunctionSignature` and friends live.
///
/// The first candidate found in the consumer's manifest wins, under whatever
/// name it was renamed to. With neither present the core crate's own name is
/// emitted, so the compile error names the missing dependency.
pub(crate) fn resolve_core_path() -> TokenStream {
    let name = CANDIDATES
        .iter()
        .find_map(|candidate| match crate_name(candidate) {
            Ok(FoundCrate::Itself) => Some((*candidate).to_string()),
            Ok(FoundCrate::Name(found)) => Some(found),
            Err(_) => None,
        })
        .unwrap_or_else(|| CANDIDATES[0].to_string());

    let ident = format_ident!("{}", name);
    quote!(#ident)
}
