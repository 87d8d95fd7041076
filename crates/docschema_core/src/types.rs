//! Type tokens and the mapping onto schema primitive kinds.
//!
//! A [`TypeToken`] is whatever a signature annotation or a docstring says
//! about a value's type. [`map_type`] reduces it to one of the five
//! [`PrimitiveKind`]s an LLM tool schema understands. Tokens with no mapping
//! resolve to `None`, which means "emit no `type` key", never an error.

use regex::Regex;
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

static RE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:typing\.)?Literal\[(.*)\]$").unwrap());

static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).unwrap());

/// Wrappers that describe the same value as their (last) type argument.
const TRANSPARENT_WRAPPERS: &[&str] = &["optional", "option", "box", "rc", "arc", "cow"];

/// The fixed vocabulary of schema parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Integers and floats alike.
    Number,
    /// Text, including closed string enumerations.
    String,
    /// `true` / `false`.
    Boolean,
    /// Any list-like collection. Element types are not described.
    Array,
    /// Any mapping. Member types are not described.
    Object,
}

impl PrimitiveKind {
    /// Returns the JSON Schema spelling of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Looks up a normalized, lowercase type name.
    fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "int" | "integer" | "float" | "double" | "number" | "numeric" | "decimal"
            | "long" | "complex" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8"
            | "u16" | "u32" | "u64" | "u128" | "usize" | "f32" | "f64" => Self::Number,
            "str" | "string" | "text" | "char" | "unicode" => Self::String,
            "bool" | "boolean" => Self::Boolean,
            "list" | "array" | "sequence" | "tuple" | "set" | "frozenset" | "iterable" | "vec"
            | "vecdeque" | "hashset" | "btreeset" | "indexset" | "slice" => Self::Array,
            "dict" | "mapping" | "object" | "map" | "hashmap" | "btreemap" | "indexmap" => {
                Self::Object
            }
            _ => return None,
        };
        Some(kind)
    }
}

impl core::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared or documented type, before it is mapped to a [`PrimitiveKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeToken {
    /// A type written by name, e.g. `int`, `List[str]` or `Vec<u8>`.
    Named(String),
    /// A closed set of string literal values, in declaration order.
    Literal(Vec<String>),
}

impl TypeToken {
    /// Creates a [`Named`](Self::Named) token.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a [`Literal`](Self::Literal) token from its values.
    pub fn literal<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Literal(values.into_iter().map(Into::into).collect())
    }

    /// Parses type text as written in a docstring.
    ///
    /// `Literal["a", "b"]` becomes a [`Literal`](Self::Literal) token,
    /// anything else is kept verbatim as a [`Named`](Self::Named) token.
    /// Returns `None` for blank text.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = RE_LITERAL.captures(text) {
            let values: Vec<String> = RE_QUOTED
                .captures_iter(&caps[1])
                .filter_map(|quoted| quoted.get(1).or_else(|| quoted.get(2)))
                .map(|m| m.as_str().to_string())
                .collect();
            if !values.is_empty() {
                return Some(Self::Literal(values));
            }
        }

        Some(Self::named(text))
    }

    /// Derives a token from a Rust type's JSON schema.
    ///
    /// Unit-only enums come out as [`Literal`](Self::Literal) tokens, so the
    /// closed-set detection is structural rather than tied to a type name.
    #[must_use]
    pub fn of<T: JsonSchema + ?Sized>() -> Option<Self> {
        let mut generator = SchemaSettings::default()
            .with(|settings| settings.inline_subschemas = true)
            .into_generator();
        let schema = T::json_schema(&mut generator);
        let value = serde_json::to_value(schema).ok()?;
        Self::from_schema(&value)
    }

    /// Derives a token from a JSON schema value.
    ///
    /// Recognized shapes, in order: an `enum` of strings, a string `const`,
    /// a `oneOf`/`anyOf` whose non-null members are all literals (or which
    /// has exactly one non-null member), and finally a `type` name. `null`
    /// members are skipped throughout.
    #[must_use]
    pub fn from_schema(schema: &Value) -> Option<Self> {
        let object = schema.as_object()?;

        if let Some(values) = object.get("enum").and_then(Value::as_array)
            && let Some(strings) = string_values(values)
        {
            return Some(Self::Literal(strings));
        }

        if let Some(constant) = object.get("const").and_then(Value::as_str) {
            return Some(Self::literal([constant]));
        }

        for key in ["oneOf", "anyOf"] {
            let Some(variants) = object.get(key).and_then(Value::as_array) else {
                continue;
            };
            let members: Vec<Option<Self>> = variants
                .iter()
                .filter(|variant| !is_null_schema(variant))
                .map(Self::from_schema)
                .collect();

            if let [single] = members.as_slice() {
                return single.clone();
            }

            let mut literals = Vec::new();
            for member in &members {
                match member {
                    Some(Self::Literal(values)) => literals.extend(values.iter().cloned()),
                    _ => return None,
                }
            }
            if !literals.is_empty() {
                return Some(Self::Literal(literals));
            }
        }

        match object.get("type")? {
            Value::String(name) if name != "null" => Some(Self::named(name.as_str())),
            Value::Array(names) => names
                .iter()
                .filter_map(Value::as_str)
                .find(|name| *name != "null")
                .map(Self::named),
            _ => None,
        }
    }

    /// Returns the primitive kind this token maps to, if any.
    #[must_use]
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Literal(_) => Some(PrimitiveKind::String),
            Self::Named(name) => {
                let kind = PrimitiveKind::from_type_name(&normalize_type_name(name));
                if kind.is_none() {
                    tracing::trace!(type_name = %name, "no schema type for type name");
                }
                kind
            }
        }
    }

    /// Returns the literal values of a closed enumeration.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[String]> {
        match self {
            Self::Literal(values) => Some(values),
            Self::Named(_) => None,
        }
    }
}

/// Maps an optional type token to its schema primitive kind.
///
/// `None` in, or an unrecognized name, gives `None` out.
#[must_use]
pub fn map_type(token: Option<&TypeToken>) -> Option<PrimitiveKind> {
    token.and_then(TypeToken::kind)
}

/// Collects the string members of an `enum` array, ignoring `null`.
fn string_values(values: &[Value]) -> Option<Vec<String>> {
    let mut strings = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Value::String(s) => strings.push(s.clone()),
            Value::Null => {}
            _ => return None,
        }
    }
    (!strings.is_empty()).then_some(strings)
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

/// Reduces a written type to the bare lowercase name used for lookup.
///
/// `Optional[int]`, `int | None`, `int, optional` and `&'a Option<i32>` all
/// reduce to the name of the underlying type. Generic arguments of anything
/// that is not a transparent wrapper are dropped.
fn normalize_type_name(raw: &str) -> String {
    let mut text = raw.trim().to_ascii_lowercase();

    loop {
        // "int, optional" / "int, default 0"
        text = first_top_level(&text, ',').trim().to_string();

        // Unions: the first alternative that is not None wins.
        let unified = text.replace(" or ", "|");
        if let Some(alternative) = split_top_level(&unified, '|')
            .into_iter()
            .map(str::trim)
            .find(|alternative| !matches!(*alternative, "none" | "null" | "nonetype"))
        {
            text = alternative.to_string();
        }

        text = strip_reference(&text);

        match unwrap_transparent(&text) {
            Some(inner) => text = inner,
            None => break,
        }
    }

    if text.starts_with('[') || (text.starts_with('(') && text != "()") {
        return "array".to_string();
    }

    let head = text
        .split(['[', '<', '('])
        .next()
        .unwrap_or_default()
        .trim();
    head.rsplit("::")
        .next()
        .and_then(|segment| segment.rsplit('.').next())
        .unwrap_or_default()
        .to_string()
}

/// Removes a leading `&`, lifetime and `mut` from a Rust reference type.
fn strip_reference(text: &str) -> String {
    let Some(rest) = text.strip_prefix('&') else {
        return text.to_string();
    };
    let mut rest = rest.trim_start();
    if rest.starts_with('\'') {
        rest = rest
            .split_once(char::is_whitespace)
            .map_or("", |(_, tail)| tail.trim_start());
    }
    rest.strip_prefix("mut ").unwrap_or(rest).trim().to_string()
}

/// Returns the last type argument of a transparent wrapper such as
/// `Optional[T]`, `Option<T>` or `Cow<'a, T>`.
fn unwrap_transparent(text: &str) -> Option<String> {
    let open = text.find(['[', '<'])?;
    let close = match text.as_bytes()[open] {
        b'[' => ']',
        _ => '>',
    };
    let base = text[..open].trim();
    let base = base.rsplit("::").next().unwrap_or(base);
    let base = base.rsplit('.').next().unwrap_or(base);
    if !TRANSPARENT_WRAPPERS.contains(&base) || !text.ends_with(close) {
        return None;
    }
    let inner = &text[open + 1..text.len() - 1];
    split_top_level(inner, ',')
        .last()
        .map(|arg| arg.trim().to_string())
}

/// Splits on `separator` outside of any bracket pair.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        match ch {
            '[' | '<' | '(' => depth += 1,
            ']' | '>' | ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&text[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn first_top_level(text: &str, separator: char) -> &str {
    split_top_level(text, separator)
        .into_iter()
        .next()
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind_of(name: &str) -> Option<PrimitiveKind> {
        map_type(Some(&TypeToken::named(name)))
    }

    #[test]
    fn maps_python_builtin_names() {
        assert_eq!(kind_of("int"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("float"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("str"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("bool"), Some(PrimitiveKind::Boolean));
        assert_eq!(kind_of("list"), Some(PrimitiveKind::Array));
        assert_eq!(kind_of("dict"), Some(PrimitiveKind::Object));
    }

    #[test]
    fn maps_case_insensitively() {
        assert_eq!(kind_of("Integer"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("STRING"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("Boolean"), Some(PrimitiveKind::Boolean));
    }

    #[test]
    fn maps_rust_type_names() {
        assert_eq!(kind_of("i32"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("f64"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("String"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("&str"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("&'static str"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("Vec<u8>"), Some(PrimitiveKind::Array));
        assert_eq!(kind_of("&[i32]"), Some(PrimitiveKind::Array));
        assert_eq!(kind_of("(i32, i32)"), Some(PrimitiveKind::Array));
        assert_eq!(
            kind_of("std::collections::HashMap<String, i32>"),
            Some(PrimitiveKind::Object)
        );
        assert_eq!(kind_of("Cow<'a, str>"), Some(PrimitiveKind::String));
    }

    #[test]
    fn strips_optional_wrappers_and_annotations() {
        assert_eq!(kind_of("int, optional"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("Optional[str]"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("typing.Optional[bool]"), Some(PrimitiveKind::Boolean));
        assert_eq!(kind_of("Option<f32>"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("int | None"), Some(PrimitiveKind::Number));
        assert_eq!(kind_of("None | str"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("str or None"), Some(PrimitiveKind::String));
        assert_eq!(kind_of("List[int]"), Some(PrimitiveKind::Array));
        assert_eq!(kind_of("Dict[str, int]"), Some(PrimitiveKind::Object));
    }

    #[test]
    fn unknown_or_absent_tokens_have_no_kind() {
        assert_eq!(kind_of("Widget"), None);
        assert_eq!(kind_of("()"), None);
        assert_eq!(map_type(None), None);
    }

    #[test]
    fn parses_docstring_literal_types() {
        let token = TypeToken::parse(r#"Literal["a", "b"]"#).unwrap();
        assert_eq!(token, TypeToken::literal(["a", "b"]));
        assert_eq!(token.kind(), Some(PrimitiveKind::String));
        assert_eq!(
            token.enum_values(),
            Some(&["a".to_string(), "b".to_string()][..])
        );

        let single_quoted = TypeToken::parse("typing.Literal['x', 'y', 'z']").unwrap();
        assert_eq!(single_quoted, TypeToken::literal(["x", "y", "z"]));
    }

    #[test]
    fn parse_keeps_other_text_as_named() {
        assert_eq!(TypeToken::parse("  int "), Some(TypeToken::named("int")));
        assert_eq!(TypeToken::parse("Literal[1, 2]"), Some(TypeToken::named("Literal[1, 2]")));
        assert_eq!(TypeToken::parse("   "), None);
    }

    #[test]
    fn reads_tokens_from_json_schemas() {
        assert_eq!(
            TypeToken::from_schema(&json!({"type": "integer", "format": "int32"})),
            Some(TypeToken::named("integer"))
        );
        assert_eq!(
            TypeToken::from_schema(&json!({"type": ["string", "null"]})),
            Some(TypeToken::named("string"))
        );
        assert_eq!(
            TypeToken::from_schema(&json!({"type": "string", "enum": ["a", "b"]})),
            Some(TypeToken::literal(["a", "b"]))
        );
        assert_eq!(
            TypeToken::from_schema(&json!({"type": ["string", "null"], "enum": ["a", null]})),
            Some(TypeToken::literal(["a"]))
        );
        assert_eq!(
            TypeToken::from_schema(&json!({
                "oneOf": [
                    {"type": "string", "const": "fast"},
                    {"type": "string", "const": "slow"}
                ]
            })),
            Some(TypeToken::literal(["fast", "slow"]))
        );
        assert_eq!(
            TypeToken::from_schema(&json!({"anyOf": [{"type": "boolean"}, {"type": "null"}]})),
            Some(TypeToken::named("boolean"))
        );
        assert_eq!(TypeToken::from_schema(&json!({"type": "null"})), None);
        assert_eq!(TypeToken::from_schema(&json!(true)), None);
    }

    #[test]
    fn derives_tokens_from_rust_types() {
        #[derive(JsonSchema)]
        #[schemars(rename_all = "lowercase")]
        #[expect(dead_code, reason = "only the schema is inspected")]
        enum Unit {
            Celsius,
            Fahrenheit,
        }

        assert_eq!(map_type(TypeToken::of::<u32>().as_ref()), Some(PrimitiveKind::Number));
        assert_eq!(map_type(TypeToken::of::<String>().as_ref()), Some(PrimitiveKind::String));
        assert_eq!(map_type(TypeToken::of::<Vec<bool>>().as_ref()), Some(PrimitiveKind::Array));
        assert_eq!(
            map_type(TypeToken::of::<Option<bool>>().as_ref()),
            Some(PrimitiveKind::Boolean)
        );
        assert_eq!(TypeToken::of::<Unit>(), Some(TypeToken::literal(["celsius", "fahrenheit"])));
    }
}
