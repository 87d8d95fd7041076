//! Procedural macros for docschema.
//!
//! Provides `#[describe]`, which captures a Rust function's signature and
//! doc comments as a `FunctionSignature` for schema generation.

mod common;
mod crate_path;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

/// Captures a function's signature for schema generation.
///
/// Leaves the function in place and generates a sibling
/// `fn <name>_signature() -> FunctionSignature` with the same visibility.
///
/// - Doc comments on the function become the docstring, line by line.
/// - Each parameter's declared type comes from its `JsonSchema` impl.
/// - `Option<T>` parameters, and parameters marked `#[default(..)]`, have a
///   default. `T`'s schema is used for `Option<T>`.
/// - The return type is `T` for `Result<T, E>`; `()` declares none.
/// - `self` receivers are skipped.
/// - Doc comments on parameters are removed.
///
/// # Example
///
/// ```
/// use docschema_core::{describe, get_function_calling_schema, SchemaOptions};
///
/// /// Adds two numbers.
/// ///
/// /// Args:
/// ///     a: First addend.
/// ///     b: Second addend.
/// #[describe]
/// fn add(a: f64, b: Option<f64>) -> f64 {
///     a + b.unwrap_or_default()
/// }
///
/// let schema = get_function_calling_schema(&add_signature, &SchemaOptions::default()).unwrap();
/// assert_eq!(schema.parameters.required, ["a"]);
/// ```
#[proc_macro_attribute]
pub fn describe(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    generate_describe(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn generate_describe(mut input: syn::ItemFn) -> Result<proc_macro2::TokenStream, syn::Error> {
    common::validate_signature(&input.sig)?;

    let dc = crate_path::resolve_core_path();
    let fn_name = input.sig.ident.unraw().to_string();
    let docstring = common::extract_doc_comments(&input.attrs);
    let params = common::parse_params(&input.sig)?;
    let return_ty = common::return_schema_type(&input.sig.output).cloned();

    let body = common::generate_signature(
        &fn_name,
        docstring.as_deref(),
        &params,
        return_ty.as_ref(),
        &dc,
    );

    common::strip_param_attrs(&mut input);
    let vis = &input.vis;
    let signature_fn = format_ident!("{}_signature", input.sig.ident);
    let doc = format!("Signature of `{fn_name}` for schema generation.");

    Ok(quote! {
        #input

        #[doc = #doc]
        #vis fn #signature_fn() -> #dc::FunctionSignature {
            #body
        }
    })
}
