//! Signature metadata consumed by schema generation.
//!
//! [`FunctionSignature`] is what the introspection side hands over: the
//! function's name, its parameters in declaration order, an optional
//! declared return type and the raw documentation text. The [`describe`]
//! attribute macro builds one from a Rust `fn`; anything else can implement
//! [`Describe`] or build a signature by hand.
//!
//! [`describe`]: crate::describe

use crate::types::TypeToken;
use serde::{Deserialize, Serialize};

/// One parameter of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSignature {
    /// Parameter name.
    pub name: String,
    /// Statically declared type, if the signature carries one.
    pub declared_type: Option<TypeToken>,
    /// Whether the signature supplies a default value.
    pub has_default: bool,
}

impl ParamSignature {
    /// Creates an untyped parameter without a default value.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            has_default: false,
        }
    }

    /// Creates an untyped parameter with a default value.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            has_default: true,
            ..Self::required(name)
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<Option<TypeToken>>) -> Self {
        self.declared_type = declared_type.into();
        self
    }
}

/// Everything schema generation needs to know about a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Function identifier.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<ParamSignature>,
    /// Declared return type, if any.
    pub return_type: Option<TypeToken>,
    /// Raw documentation text attached to the function.
    pub docstring: Option<String>,
}

impl FunctionSignature {
    /// Creates an undocumented signature with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            docstring: None,
        }
    }

    /// Attaches documentation text.
    #[must_use]
    pub fn with_doc(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, param: ParamSignature) -> Self {
        self.params.push(param);
        self
    }

    /// Sets the declared return type.
    #[must_use]
    pub fn returns(mut self, return_type: impl Into<Option<TypeToken>>) -> Self {
        self.return_type = return_type.into();
        self
    }
}

/// A callable that can report its own signature.
pub trait Describe {
    /// Returns the signature and documentation of the callable.
    fn signature(&self) -> FunctionSignature;
}

impl Describe for FunctionSignature {
    fn signature(&self) -> FunctionSignature {
        self.clone()
    }
}

impl<F: Fn() -> FunctionSignature> Describe for F {
    fn signature(&self) -> FunctionSignature {
        self()
    }
}
