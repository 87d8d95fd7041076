//! Signature extraction and code generation for `#[describe]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericArgument, ItemFn, Lit, Meta, Pat, PatType,
    PathArguments, ReturnType, Signature, Type,
};

/// Validates that a function signature can be described.
///
/// Rejects generic, unsafe, and extern functions.
pub(crate) fn validate_signature(sig: &Signature) -> Result<(), syn::Error> {
    if let Some(unsafety) = &sig.unsafety {
        return Err(syn::Error::new_spanned(
            unsafety,
            "#[describe] cannot be applied to unsafe functions",
        ));
    }

    if let Some(abi) = &sig.abi {
        return Err(syn::Error::new_spanned(
            abi,
            "#[describe] cannot be applied to extern functions",
        ));
    }

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[describe] does not support generic parameters",
        ));
    }

    Ok(())
}

/// A parameter as seen by the describing side.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name.
    pub name: String,
    /// Type whose schema decides the declared type. `T` for `Option<T>`.
    pub schema_ty: Type,
    /// Whether the caller may omit the argument.
    pub has_default: bool,
}

/// Extracts doc comment text from attributes, one line per attribute.
///
/// Lines keep their leading whitespace so that indentation-sensitive
/// docstring sections survive; normalization happens at parse time.
pub(crate) fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit_str),
                    ..
                }) => Some(lit_str.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Parses every typed parameter in declaration order. Receivers are skipped.
pub(crate) fn parse_params(sig: &Signature) -> Result<Vec<ParamInfo>, syn::Error> {
    sig.inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat_type) => Some(parse_param(pat_type)),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

fn parse_param(pat_type: &PatType) -> Result<ParamInfo, syn::Error> {
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return Err(syn::Error::new_spanned(
            &pat_type.pat,
            "#[describe] parameters must be plain identifiers",
        ));
    };

    let ty = &*pat_type.ty;
    let has_default_attr = pat_type
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("default"));
    let option_inner = unwrap_option_inner(ty);

    Ok(ParamInfo {
        name: pat_ident.ident.unraw().to_string(),
        schema_ty: option_inner.unwrap_or(ty).clone(),
        has_default: has_default_attr || option_inner.is_some(),
    })
}

/// Returns the type whose schema describes the return value.
///
/// `Result<T, E>` describes `T`; `()` and a missing return type describe
/// nothing.
pub(crate) fn return_schema_type(return_type: &ReturnType) -> Option<&Type> {
    let ReturnType::Type(_, ty) = return_type else {
        return None;
    };
    let ty = unwrap_generic(ty, "Result").unwrap_or(ty);
    match ty {
        Type::Tuple(tuple) if tuple.elems.is_empty() => None,
        _ => Some(ty),
    }
}

/// Extracts `T` from `Option<T>`, returning `None` if the type is not `Option`.
fn unwrap_option_inner(ty: &Type) -> Option<&Type> {
    unwrap_generic(ty, "Option")
}

/// Extracts the first type argument of `wrapper<T, ..>`.
fn unwrap_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        Some(inner)
    } else {
        None
    }
}

/// Removes the attributes Rust does not accept on function parameters.
pub(crate) fn strip_param_attrs(item: &mut ItemFn) {
    for arg in &mut item.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            pat_type
                .attrs
                .retain(|attr| !attr.path().is_ident("default") && !attr.path().is_ident("doc"));
        }
    }
}

/// Generates the body of `<name>_signature()`.
pub(crate) fn generate_signature(
    fn_name: &str,
    docstring: Option<&str>,
    params: &[ParamInfo],
    return_ty: Option<&Type>,
    dc: &TokenStream,
) -> TokenStream {
    let doc_builder = docstring
        .map(|doc| quote! { .with_doc(#doc) })
        .unwrap_or_default();

    let param_builders = params.iter().map(|param| {
        let name = &param.name;
        let ty = &param.schema_ty;
        let constructor = if param.has_default {
            format_ident!("optional")
        } else {
            format_ident!("required")
        };
        quote! {
            .param(
                #dc::ParamSignature::#constructor(#name)
                    .with_type(#dc::TypeToken::of::<#ty>())
            )
        }
    });

    let return_builder = return_ty
        .map(|ty| quote! { .returns(#dc::TypeToken::of::<#ty>()) })
        .unwrap_or_default();

    quote! {
        #dc::FunctionSignature::new(#fn_name)
            #doc_builder
            #(#param_builders)*
            #return_builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn doc_comments_keep_indentation() {
        let item: ItemFn = parse_quote! {
            /// Short.
            ///
            /// Args:
            ///     x: Value.
            fn f(x: i32) {}
        };
        assert_eq!(
            extract_doc_comments(&item.attrs).as_deref(),
            Some(" Short.\n\n Args:\n     x: Value.")
        );
    }

    #[test]
    fn undocumented_function_has_no_docstring() {
        let item: ItemFn = parse_quote! { fn f() {} };
        assert_eq!(extract_doc_comments(&item.attrs), None);
    }

    #[test]
    fn option_and_default_attributes_mark_defaults() {
        let item: ItemFn = parse_quote! {
            fn f(&self, a: i32, b: Option<String>, #[default(3)] c: u8) {}
        };
        let params = parse_params(&item.sig).unwrap();
        let summary: Vec<(&str, bool)> = params
            .iter()
            .map(|param| (param.name.as_str(), param.has_default))
            .collect();
        assert_eq!(summary, [("a", false), ("b", true), ("c", true)]);

        let expected: Type = parse_quote!(String);
        assert_eq!(params[1].schema_ty, expected);
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        let item: ItemFn = parse_quote! { fn f(r#type: String, r#match: bool) {} };
        let names: Vec<String> = parse_params(&item.sig)
            .unwrap()
            .into_iter()
            .map(|param| param.name)
            .collect();
        assert_eq!(names, ["type", "match"]);
    }

    #[test]
    fn destructured_parameters_are_rejected() {
        let item: ItemFn = parse_quote! { fn f((a, b): (i32, i32)) {} };
        assert!(parse_params(&item.sig).is_err());
    }

    #[test]
    fn return_types_unwrap_results_and_skip_unit() {
        let ty = |item: ItemFn| return_schema_type(&item.sig.output).cloned();
        let expected: Type = parse_quote!(bool);

        assert_eq!(ty(parse_quote! { fn f() -> bool { true } }), Some(expected.clone()));
        assert_eq!(
            ty(parse_quote! { fn f() -> Result<bool, String> { Ok(true) } }),
            Some(expected)
        );
        assert_eq!(ty(parse_quote! { fn f() -> () {} }), None);
        assert_eq!(ty(parse_quote! { fn f() {} }), None);
    }

    #[test]
    fn rejects_generic_and_unsafe_functions() {
        let generic: ItemFn = parse_quote! { fn f<T>(x: T) {} };
        assert!(validate_signature(&generic.sig).is_err());

        let unsafe_fn: ItemFn = parse_quote! { unsafe fn f() {} };
        assert!(validate_signature(&unsafe_fn.sig).is_err());

        let plain: ItemFn = parse_quote! { async fn f(x: i32) -> i32 { x } };
        assert!(validate_signature(&plain.sig).is_ok());
    }

    #[test]
    fn strips_parameter_helper_attributes() {
        let mut item: ItemFn = parse_quote! {
            fn f(#[default(1)] a: i32, #[allow(unused)] b: i32) {}
        };
        strip_param_attrs(&mut item);
        let remaining: Vec<usize> = item
            .sig
            .inputs
            .iter()
            .map(|arg| match arg {
                FnArg::Typed(pat_type) => pat_type.attrs.len(),
                FnArg::Receiver(_) => 0,
            })
            .collect();
        assert_eq!(remaining, [0, 1]);
    }
}
