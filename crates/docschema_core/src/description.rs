//! Composition of the schema's `description` field.

use crate::error::FunctionDescriptionError;

/// Joins the short and long descriptions.
pub const DESCRIPTION_SEPARATOR: &str = " ";

/// Builds the function description from its parts.
///
/// Returns `short` unchanged unless `include_long` is set. With
/// `include_long`, the long description is appended after
/// [`DESCRIPTION_SEPARATOR`].
///
/// # Errors
///
/// [`FunctionDescriptionError::MissingLongDescription`] when `include_long`
/// is set and `long` is absent or blank.
pub fn compose(
    function: &str,
    short: &str,
    long: Option<&str>,
    include_long: bool,
) -> Result<String, FunctionDescriptionError> {
    if !include_long {
        return Ok(short.to_string());
    }
    match long.map(str::trim).filter(|long| !long.is_empty()) {
        Some(long) => Ok(format!("{short}{DESCRIPTION_SEPARATOR}{long}")),
        None => Err(FunctionDescriptionError::missing_long_description(function)),
    }
}
