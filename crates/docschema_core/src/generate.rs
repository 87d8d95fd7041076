//! The schema generation entry point.

use crate::description::compose;
use crate::docstring::parse_docstring;
use crate::error::FunctionDescriptionError;
use crate::options::SchemaOptions;
use crate::reconcile::{reconcile, reconcile_return};
use crate::schema::FunctionCallingSchema;
use crate::signature::Describe;

/// Generates the function-calling schema of `target`.
///
/// The docstring is parsed with the first matching style, its parameters are
/// reconciled with the signature, and the result is assembled in signature
/// order. With [`SchemaOptions::include_return_in_parameters`] a documented
/// return value is appended as a required `"return"` property.
///
/// # Errors
///
/// Fails with [`FunctionDescriptionError`] when the target has no
/// documentation, no short description, or no long description while
/// [`SchemaOptions::include_long_description`] is set.
///
/// # Example
///
/// ```
/// use docschema_core::{FunctionSignature, ParamSignature, SchemaOptions};
/// use docschema_core::get_function_calling_schema;
///
/// let signature = FunctionSignature::new("f")
///     .with_doc("Short description.\n\n:param i: Integer parameter.\n:type i: int")
///     .param(ParamSignature::required("i"));
///
/// let schema = get_function_calling_schema(&signature, &SchemaOptions::default()).unwrap();
/// assert_eq!(
///     schema.to_value(),
///     serde_json::json!({
///         "name": "f",
///         "description": "Short description.",
///         "parameters": {
///             "type": "object",
///             "properties": {"i": {"type": "number", "description": "Integer parameter."}},
///             "required": ["i"]
///         }
///     })
/// );
/// ```
pub fn get_function_calling_schema<T: Describe + ?Sized>(
    target: &T,
    options: &SchemaOptions,
) -> Result<FunctionCallingSchema, FunctionDescriptionError> {
    let signature = target.signature();
    let name = signature.name.as_str();

    let docstring = parse_docstring(name, signature.docstring.as_deref(), options.style)?;
    let description = compose(
        name,
        &docstring.short_description,
        docstring.long_description.as_deref(),
        options.include_long_description,
    )?;

    let mut params = reconcile(&signature, &docstring);
    if options.include_return_in_parameters
        && let Some(return_param) = reconcile_return(&signature, &docstring)
    {
        params.push(return_param);
    }

    Ok(params.iter().fold(
        FunctionCallingSchema::new(name).with_description(description),
        FunctionCallingSchema::add_parameter,
    ))
}
