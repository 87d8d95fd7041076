//! Schema types for function-calling definitions.
//!
//! Provides [`ParameterInfo`] for reconciled parameter metadata and
//! [`FunctionCallingSchema`] for the final `{name, description, parameters}`
//! object handed to an LLM tool-calling API.

use crate::types::{PrimitiveKind, TypeToken, map_type};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reconciled metadata for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name.
    pub name: String,
    /// Type from the signature's static annotation.
    pub declared_type: Option<TypeToken>,
    /// Type written in the docstring.
    pub docstring_type: Option<TypeToken>,
    /// Docstring description, empty when undocumented.
    pub description: String,
    /// Whether the signature supplies a default value.
    pub has_default: bool,
}

impl ParameterInfo {
    /// Creates an undocumented, untyped parameter without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            docstring_type: None,
            description: String::new(),
            has_default: false,
        }
    }

    /// Returns the type that decides the schema type.
    ///
    /// The declared type wins over the docstring type whenever both exist.
    #[must_use]
    pub fn resolved_type(&self) -> Option<&TypeToken> {
        self.declared_type.as_ref().or(self.docstring_type.as_ref())
    }

    /// Returns the schema primitive kind, if the resolved type maps to one.
    #[must_use]
    pub fn kind(&self) -> Option<PrimitiveKind> {
        map_type(self.resolved_type())
    }

    /// Returns the literal values when the resolved type is a closed set.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[String]> {
        self.resolved_type().and_then(TypeToken::enum_values)
    }

    /// Whether the parameter appears in `required`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !self.has_default
    }
}

/// Schema of one property in `parameters.properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Primitive kind; omitted when the type is unknown.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PrimitiveKind>,
    /// Description text, possibly empty.
    pub description: String,
    /// Allowed values of a closed string enumeration.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl From<&ParameterInfo> for PropertySchema {
    fn from(param: &ParameterInfo) -> Self {
        Self {
            kind: param.kind(),
            description: param.description.clone(),
            enum_values: param.enum_values().map(<[String]>::to_vec),
        }
    }
}

/// The `parameters` object: always of type `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always [`PrimitiveKind::Object`].
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    /// Properties in signature order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of parameters without defaults, in signature order.
    pub required: Vec<String>,
}

impl Default for ParametersSchema {
    fn default() -> Self {
        Self {
            kind: PrimitiveKind::Object,
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }
}

/// A complete function-calling schema.
///
/// Serializes to exactly
/// `{"name", "description", "parameters": {"type", "properties", "required"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallingSchema {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// Parameter object schema.
    pub parameters: ParametersSchema,
}

impl FunctionCallingSchema {
    /// Creates a schema with the given function name and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: ParametersSchema::default(),
        }
    }

    /// Sets the function description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a parameter to `properties`, and to `required` when it has
    /// no default.
    #[must_use]
    pub fn add_parameter(mut self, param: &ParameterInfo) -> Self {
        let replaced = self
            .parameters
            .properties
            .insert(param.name.clone(), PropertySchema::from(param))
            .is_some();
        if replaced {
            self.parameters.required.retain(|name| name != &param.name);
        }
        if param.is_required() {
            self.parameters.required.push(param.name.clone());
        }
        self
    }

    /// Returns the schema as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}
