//! Function-calling schemas from documented functions.
//!
//! This crate turns a function's signature and its docstring into the JSON
//! schema LLM tool-calling APIs expect. Docstrings in reStructuredText,
//! Google, and Numpy styles are detected automatically; their parameter
//! descriptions and types are merged with the statically declared types of
//! the signature.
//!
//! # Quick Start
//!
//! ```
//! use docschema_core::{describe, get_function_calling_schema, SchemaOptions};
//!
//! /// Look up the weather.
//! ///
//! /// :param city: City name.
//! /// :param days: Forecast length.
//! #[describe]
//! fn forecast(city: String, days: Option<u32>) -> String {
//!     format!("{city}: sunny for {} days", days.unwrap_or(1))
//! }
//!
//! let schema = get_function_calling_schema(&forecast_signature, &SchemaOptions::default())?;
//! assert_eq!(
//!     schema.to_value(),
//!     serde_json::json!({
//!         "name": "forecast",
//!         "description": "Look up the weather.",
//!         "parameters": {
//!             "type": "object",
//!             "properties": {
//!                 "city": {"type": "string", "description": "City name."},
//!                 "days": {"type": "number", "description": "Forecast length."}
//!             },
//!             "required": ["city"]
//!         }
//!     })
//! );
//! # Ok::<(), docschema_core::FunctionDescriptionError>(())
//! ```
//!
//! # Architecture
//!
//! - [`FunctionSignature`] / [`Describe`]: what the caller knows about a function
//! - [`parse_docstring`] / [`DocstringStyle`]: style detection and parsing
//! - [`map_type`] / [`TypeToken`]: type names to schema primitive kinds
//! - [`reconcile()`]: merges docstring and signature data per parameter
//! - [`FunctionCallingSchema`]: the serialized result
//! - [`get_function_calling_schema`]: ties the steps together

// Lets `#[describe]`-generated code use `docschema_core::` paths within this crate.
extern crate self as docschema_core;

pub mod description;
pub mod docstring;
pub mod error;
pub mod generate;
pub mod options;
pub mod reconcile;
pub mod schema;
pub mod signature;
pub mod types;

pub use description::{DESCRIPTION_SEPARATOR, compose};
pub use docstring::{DocParam, DocReturn, DocstringStyle, ParsedDocstring, parse_docstring};
pub use error::FunctionDescriptionError;
pub use generate::get_function_calling_schema;
pub use options::SchemaOptions;
pub use reconcile::{RETURN_PARAMETER, reconcile, reconcile_return};
pub use schema::{FunctionCallingSchema, ParameterInfo, ParametersSchema, PropertySchema};
pub use signature::{Describe, FunctionSignature, ParamSignature};
pub use types::{PrimitiveKind, TypeToken, map_type};

pub use describe_macros::describe;

/// The types most callers need.
pub mod prelude {
    pub use crate::{
        Describe, DocstringStyle, FunctionCallingSchema, FunctionDescriptionError,
        FunctionSignature, ParamSignature, SchemaOptions, TypeToken, describe,
        get_function_calling_schema,
    };
}
