//! reStructuredText field-list docstrings (`:param x:`, `:type x:`, ...).

use super::text::{bare_name, join_wrapped, split_description};
use super::{DocReturn, ParsedDocstring};
use crate::types::TypeToken;
use regex::Regex;
use std::sync::LazyLock;

// `:key:`, `:key arg:` or `:key type arg:` followed by the field body.
static RE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(\w+)(?:\s+([^:]+?))?\s*:\s*(.*)$").unwrap());

const PARAM_KEYS: &[&str] = &["param", "parameter", "arg", "argument", "key", "keyword"];
const RETURN_KEYS: &[&str] = &["return", "returns"];

#[derive(Debug)]
struct Field<'a> {
    key: &'a str,
    arg: Option<&'a str>,
    body: Vec<&'a str>,
}

impl Field<'_> {
    fn text(&self) -> String {
        join_wrapped(self.body.iter().copied())
    }
}

fn is_marker(key: &str) -> bool {
    PARAM_KEYS.contains(&key) || RETURN_KEYS.contains(&key) || matches!(key, "type" | "rtype")
}

/// Parses a reST docstring, or returns `None` when it has no `:param:`,
/// `:type:`, `:return:` or `:rtype:` field.
pub(crate) fn parse(text: &str) -> Option<ParsedDocstring> {
    let lines: Vec<&str> = text.lines().collect();
    let first_field = lines.iter().position(|line| RE_FIELD.is_match(line))?;

    let mut fields: Vec<Field<'_>> = Vec::new();
    for &line in &lines[first_field..] {
        if let Some(caps) = RE_FIELD.captures(line) {
            let mut body = Vec::new();
            if let Some(rest) = caps.get(3).filter(|m| !m.as_str().is_empty()) {
                body.push(rest.as_str());
            }
            fields.push(Field {
                key: caps.get(1).map_or("", |m| m.as_str()),
                arg: caps.get(2).map(|m| m.as_str().trim()),
                body,
            });
        } else if let Some(field) = fields.last_mut() {
            field.body.push(line);
        }
    }

    if !fields.iter().any(|field| is_marker(field.key)) {
        return None;
    }

    let (short_description, long_description) = split_description(&lines[..first_field]);
    let mut parsed = ParsedDocstring::new(short_description, long_description);

    for field in &fields {
        match field.key {
            key if PARAM_KEYS.contains(&key) => {
                let Some(arg) = field.arg else { continue };
                // `:param int count:` carries the type inline.
                let (type_text, name) = match arg.rsplit_once(char::is_whitespace) {
                    Some((type_text, name)) => (Some(type_text), name),
                    None => (None, arg),
                };
                let entry = parsed.param_entry(bare_name(name));
                entry.description = field.text();
                if let Some(token) = type_text.and_then(TypeToken::parse) {
                    entry.type_token = Some(token);
                }
            }
            "type" => {
                let Some(name) = field.arg else { continue };
                parsed.param_entry(bare_name(name)).type_token = TypeToken::parse(&field.text());
            }
            key if RETURN_KEYS.contains(&key) => {
                parsed.returns.get_or_insert_with(DocReturn::default).description = field.text();
            }
            "rtype" => {
                parsed.returns.get_or_insert_with(DocReturn::default).type_token =
                    TypeToken::parse(&field.text());
            }
            _ => {}
        }
    }

    Some(parsed)
}
