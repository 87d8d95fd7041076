//! Error types for schema generation.

use thiserror::Error;

/// The single failure kind of schema generation.
///
/// Every other anomaly (unknown type names, undocumented parameters,
/// docstring entries for parameters that do not exist) is absorbed, so a
/// caller only has to handle missing or insufficient descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionDescriptionError {
    /// The function has no documentation comment at all.
    #[error("function '{function}' has no documentation")]
    MissingDocumentation {
        /// Function name.
        function: String,
    },

    /// Documentation exists but carries no leading description text.
    #[error("function '{function}' has no short description")]
    MissingShortDescription {
        /// Function name.
        function: String,
    },

    /// A long description was requested but the documentation has none.
    #[error("function '{function}' has no long description")]
    MissingLongDescription {
        /// Function name.
        function: String,
    },
}

impl FunctionDescriptionError {
    /// Creates a [`MissingDocumentation`](Self::MissingDocumentation).
    pub fn missing_documentation(function: impl Into<String>) -> Self {
        Self::MissingDocumentation {
            function: function.into(),
        }
    }

    /// Creates a [`MissingShortDescription`](Self::MissingShortDescription).
    pub fn missing_short_description(function: impl Into<String>) -> Self {
        Self::MissingShortDescription {
            function: function.into(),
        }
    }

    /// Creates a [`MissingLongDescription`](Self::MissingLongDescription).
    pub fn missing_long_description(function: impl Into<String>) -> Self {
        Self::MissingLongDescription {
            function: function.into(),
        }
    }

    /// Returns the name of the function that failed to describe.
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::MissingDocumentation { function }
            | Self::MissingShortDescription { function }
            | Self::MissingLongDescription { function } => function,
        }
    }
}
