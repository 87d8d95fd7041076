//! Schema generation options.

use crate::docstring::DocstringStyle;
use serde::{Deserialize, Serialize};

/// Options for [`get_function_calling_schema`](crate::get_function_calling_schema).
///
/// All options are independent and off by default. The struct deserializes
/// from partial configuration, missing keys taking their defaults.
///
/// # Example
///
/// ```
/// use docschema_core::{DocstringStyle, SchemaOptions};
///
/// let options = SchemaOptions::default()
///     .with_long_description(true)
///     .with_style(DocstringStyle::Google);
/// assert!(options.include_long_description);
/// assert!(!options.include_return_in_parameters);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    /// Append the long description to the short one. Generation fails if
    /// the docstring has no long description.
    pub include_long_description: bool,
    /// Describe the documented return value as a required `"return"`
    /// property after all real parameters.
    pub include_return_in_parameters: bool,
    /// Only try this docstring style instead of auto-detecting.
    pub style: Option<DocstringStyle>,
}

impl SchemaOptions {
    /// Sets [`include_long_description`](Self::include_long_description).
    #[must_use]
    pub fn with_long_description(mut self, include: bool) -> Self {
        self.include_long_description = include;
        self
    }

    /// Sets [`include_return_in_parameters`](Self::include_return_in_parameters).
    #[must_use]
    pub fn with_return_in_parameters(mut self, include: bool) -> Self {
        self.include_return_in_parameters = include;
        self
    }

    /// Pins the docstring style.
    #[must_use]
    pub fn with_style(mut self, style: DocstringStyle) -> Self {
        self.style = Some(style);
        self
    }
}
