//! Docstring detection and parsing.
//!
//! Three conventions are understood, each by its own detector:
//!
//! - [`DocstringStyle::Rest`]: `:param x:` / `:type x:` / `:return:` / `:rtype:` fields
//! - [`DocstringStyle::Google`]: `Args:` / `Returns:` sections
//! - [`DocstringStyle::Numpy`]: `Parameters` / `Returns` sections underlined with dashes
//!
//! A detector either claims a docstring and returns a [`ParsedDocstring`],
//! or declines so the next one can try. [`parse_docstring`] runs them in the
//! order above and keeps the first claim. Text that no detector claims is
//! read as description only.

mod google;
mod numpy;
mod rest;
mod text;

use crate::error::FunctionDescriptionError;
use crate::types::TypeToken;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A docstring convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringStyle {
    /// reStructuredText field lists.
    Rest,
    /// Google-style sections.
    Google,
    /// Numpy-style sections.
    Numpy,
}

impl DocstringStyle {
    /// Every style, in dispatch precedence order.
    pub const ALL: [Self; 3] = [Self::Rest, Self::Google, Self::Numpy];

    /// Runs this style's detector over normalized docstring text.
    ///
    /// Returns `None` when the text carries none of the style's markers.
    #[must_use]
    pub fn try_parse(self, text: &str) -> Option<ParsedDocstring> {
        let parsed = match self {
            Self::Rest => rest::parse(text),
            Self::Google => google::parse(text),
            Self::Numpy => numpy::parse(text),
        }?;
        Some(ParsedDocstring {
            style: Some(self),
            ..parsed
        })
    }
}

/// A documented parameter as the docstring describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocParam {
    /// Description text, wrapped lines joined with single spaces.
    pub description: String,
    /// Type as written in the docstring, if any.
    pub type_token: Option<TypeToken>,
}

/// A documented return value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocReturn {
    /// Description text.
    pub description: String,
    /// Type as written in the docstring, if any.
    pub type_token: Option<TypeToken>,
}

/// Structured content of one docstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocstring {
    /// Detector that claimed the text, `None` for description-only text.
    pub style: Option<DocstringStyle>,
    /// First paragraph.
    pub short_description: String,
    /// Paragraphs after the first, blank-line separated.
    pub long_description: Option<String>,
    /// Documented parameters in order of appearance.
    pub parameters: IndexMap<String, DocParam>,
    /// Documented return value, if any.
    pub returns: Option<DocReturn>,
}

impl ParsedDocstring {
    pub(crate) fn new(short_description: String, long_description: Option<String>) -> Self {
        Self {
            style: None,
            short_description,
            long_description,
            parameters: IndexMap::new(),
            returns: None,
        }
    }

    /// Reads text that no detector claimed as description only.
    fn description_only(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let (short, long) = text::split_description(&lines);
        Self::new(short, long)
    }

    /// Returns the entry for `name`, creating it at the end if needed.
    pub(crate) fn param_entry(&mut self, name: &str) -> &mut DocParam {
        self.parameters.entry(name.to_string()).or_default()
    }
}

/// Parses raw documentation text attached to `function`.
///
/// Detectors run in [`DocstringStyle::ALL`] order unless `style` pins one.
///
/// # Errors
///
/// - [`FunctionDescriptionError::MissingDocumentation`] when `raw` is `None`.
/// - [`FunctionDescriptionError::MissingShortDescription`] when no text
///   precedes the first structural marker.
pub fn parse_docstring(
    function: &str,
    raw: Option<&str>,
    style: Option<DocstringStyle>,
) -> Result<ParsedDocstring, FunctionDescriptionError> {
    let raw = raw.ok_or_else(|| FunctionDescriptionError::missing_documentation(function))?;
    let text = text::clean(raw);

    let candidates: &[DocstringStyle] = match &style {
        Some(pinned) => core::slice::from_ref(pinned),
        None => &DocstringStyle::ALL,
    };

    let parsed = candidates
        .iter()
        .find_map(|candidate| candidate.try_parse(&text))
        .unwrap_or_else(|| ParsedDocstring::description_only(&text));

    if parsed.short_description.is_empty() {
        return Err(FunctionDescriptionError::missing_short_description(function));
    }

    tracing::debug!(
        function,
        style = ?parsed.style,
        parameters = parsed.parameters.len(),
        "parsed docstring"
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: &str = "Short.\n\n:param x: Value.\n:type x: int";
    const GOOGLE: &str = "Short.\n\nArgs:\n    x (int): Value.";
    const NUMPY: &str = "Short.\n\nParameters\n----------\nx : int\n    Value.";

    #[test]
    fn dispatch_identifies_each_style() {
        for (text, style) in [
            (REST, DocstringStyle::Rest),
            (GOOGLE, DocstringStyle::Google),
            (NUMPY, DocstringStyle::Numpy),
        ] {
            let parsed = parse_docstring("f", Some(text), None).unwrap();
            assert_eq!(parsed.style, Some(style));
            assert_eq!(parsed.parameters["x"].description, "Value.");
            assert_eq!(parsed.parameters["x"].type_token, Some(TypeToken::named("int")));
        }
    }

    #[test]
    fn rest_wins_over_later_styles() {
        let mixed = "Short.\n\nArgs:\n    y (str): Google entry.\n\n:param x: reST entry.";
        let parsed = parse_docstring("f", Some(mixed), None).unwrap();
        assert_eq!(parsed.style, Some(DocstringStyle::Rest));
        assert!(parsed.parameters.contains_key("x"));
        assert!(!parsed.parameters.contains_key("y"));
    }

    #[test]
    fn pinned_style_skips_other_detectors() {
        let parsed = parse_docstring("f", Some(GOOGLE), Some(DocstringStyle::Numpy)).unwrap();
        assert_eq!(parsed.style, None);
        assert!(parsed.parameters.is_empty());
    }

    #[test]
    fn unclaimed_text_is_description_only() {
        let parsed = parse_docstring("f", Some("\n    Short.\n\n    Long.\n"), None).unwrap();
        assert_eq!(parsed.style, None);
        assert_eq!(parsed.short_description, "Short.");
        assert_eq!(parsed.long_description.as_deref(), Some("Long."));
    }

    #[test]
    fn missing_documentation_is_an_error() {
        let err = parse_docstring("f", None, None).unwrap_err();
        assert_eq!(err, FunctionDescriptionError::missing_documentation("f"));
    }

    #[test]
    fn missing_short_description_is_an_error() {
        for text in [":param x: Value.", "Args:\n    x: Value.", "   \n  "] {
            let err = parse_docstring("f", Some(text), None).unwrap_err();
            assert_eq!(err, FunctionDescriptionError::missing_short_description("f"));
        }
    }
}
