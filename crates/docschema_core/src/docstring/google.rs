//! Google-style docstrings (`Args:` / `Returns:` sections).

use super::text::{
    Entry, bare_name, group_entries, indent_of, join_wrapped, split_description, strip_optional,
};
use super::{DocReturn, ParsedDocstring};
use crate::types::TypeToken;
use regex::Regex;
use std::sync::LazyLock;

static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Za-z ]*):$").unwrap());

// `name (type): description` or `name: description`
static RE_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*{0,2}\w+)\s*(?:\((.*?)\))?\s*:\s*(.*)$").unwrap());

// `type: description`
static RE_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+?)\s*:(?:\s+(.*))?$").unwrap());

const ARGS_HEADERS: &[&str] = &["Args", "Arguments"];
const RETURNS_HEADERS: &[&str] = &["Returns", "Return"];

/// Section names that end the current section without being parsed.
const OTHER_HEADERS: &[&str] = &[
    "Attributes",
    "Example",
    "Examples",
    "Keyword Args",
    "Keyword Arguments",
    "Methods",
    "Note",
    "Notes",
    "Other Parameters",
    "Raises",
    "References",
    "See Also",
    "Todo",
    "Warning",
    "Warnings",
    "Warns",
    "Yield",
    "Yields",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Args,
    Returns,
    Other,
}

fn section_of(line: &str) -> Option<Section> {
    if indent_of(line) != 0 {
        return None;
    }
    let caps = RE_SECTION.captures(line)?;
    let name = caps.get(1)?.as_str();
    if ARGS_HEADERS.contains(&name) {
        Some(Section::Args)
    } else if RETURNS_HEADERS.contains(&name) {
        Some(Section::Returns)
    } else if OTHER_HEADERS.contains(&name) {
        Some(Section::Other)
    } else {
        None
    }
}

/// Parses a Google-style docstring, or returns `None` when it has neither
/// an `Args:` nor a `Returns:` section.
pub(crate) fn parse(text: &str) -> Option<ParsedDocstring> {
    let lines: Vec<&str> = text.lines().collect();
    let headers: Vec<(usize, Section)> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| section_of(line).map(|section| (index, section)))
        .collect();

    if !headers
        .iter()
        .any(|(_, section)| matches!(section, Section::Args | Section::Returns))
    {
        return None;
    }

    let (short_description, long_description) = split_description(&lines[..headers[0].0]);
    let mut parsed = ParsedDocstring::new(short_description, long_description);

    for (position, &(start, section)) in headers.iter().enumerate() {
        let end = headers
            .get(position + 1)
            .map_or(lines.len(), |&(next, _)| next);
        let entries = group_entries(&lines[start + 1..end]);
        match section {
            Section::Args => parse_args(&entries, &mut parsed),
            Section::Returns => parse_returns(&entries, &mut parsed),
            Section::Other => {}
        }
    }

    Some(parsed)
}

fn parse_args(entries: &[Entry<'_>], parsed: &mut ParsedDocstring) {
    for entry in entries {
        let Some(caps) = RE_ARG.captures(entry.head) else {
            continue;
        };
        let Some(name) = caps.get(1) else { continue };
        let param = parsed.param_entry(bare_name(name.as_str()));
        param.type_token = caps
            .get(2)
            .and_then(|m| TypeToken::parse(strip_optional(m.as_str())));
        param.description = join_wrapped(
            caps.get(3)
                .map(|m| m.as_str())
                .into_iter()
                .chain(entry.body.iter().copied()),
        );
    }
}

fn parse_returns(entries: &[Entry<'_>], parsed: &mut ParsedDocstring) {
    let Some(first) = entries.first() else {
        return;
    };

    let (type_token, head_text) = match RE_RETURN.captures(first.head) {
        Some(caps) => (
            caps.get(1).and_then(|m| TypeToken::parse(m.as_str())),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (None, first.head),
    };

    // Lines after the first entry are wrapped description text too.
    let rest = entries
        .iter()
        .skip(1)
        .flat_map(|entry| core::iter::once(entry.head).chain(entry.body.iter().copied()));
    let description = join_wrapped(
        core::iter::once(head_text)
            .chain(first.body.iter().copied())
            .chain(rest),
    );

    parsed.returns = Some(DocReturn {
        description,
        type_token,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_args_and_returns() {
        let parsed = parse(indoc! {"
            Short description.

            Long description.

            Args:
                i (int): Integer parameter.
                s: String parameter
                    spanning two lines.
                e (Literal[\"a\", \"b\"], optional): Enum parameter.

            Returns:
                int: Return value.
        "})
        .unwrap();

        assert_eq!(parsed.short_description, "Short description.");
        assert_eq!(parsed.long_description.as_deref(), Some("Long description."));

        assert_eq!(parsed.parameters["i"].description, "Integer parameter.");
        assert_eq!(parsed.parameters["i"].type_token, Some(TypeToken::named("int")));
        assert_eq!(
            parsed.parameters["s"].description,
            "String parameter spanning two lines."
        );
        assert_eq!(parsed.parameters["s"].type_token, None);
        assert_eq!(
            parsed.parameters["e"].type_token,
            Some(TypeToken::literal(["a", "b"]))
        );

        let returns = parsed.returns.unwrap();
        assert_eq!(returns.description, "Return value.");
        assert_eq!(returns.type_token, Some(TypeToken::named("int")));
    }

    #[test]
    fn description_may_follow_colon_directly() {
        let parsed = parse("Summary.\n\nArgs:\n    x (int):Value.\n    y:Other.").unwrap();
        assert_eq!(parsed.parameters["x"].description, "Value.");
        assert_eq!(parsed.parameters["x"].type_token, Some(TypeToken::named("int")));
        assert_eq!(parsed.parameters["y"].description, "Other.");
        assert_eq!(parsed.parameters["y"].type_token, None);
    }

    #[test]
    fn return_without_type() {
        let parsed = parse("Summary.\n\nReturns:\n    The computed value.").unwrap();
        let returns = parsed.returns.unwrap();
        assert_eq!(returns.description, "The computed value.");
        assert_eq!(returns.type_token, None);
    }

    #[test]
    fn other_sections_close_args() {
        let parsed = parse(indoc! {"
            Summary.

            Args:
                *args: Positional values.
                **kwargs: Options.

            Raises:
                ValueError: Never.
        "})
        .unwrap();
        let names: Vec<&str> = parsed.parameters.keys().map(String::as_str).collect();
        assert_eq!(names, ["args", "kwargs"]);
        assert!(parsed.returns.is_none());
    }

    #[test]
    fn declines_docstrings_without_sections() {
        assert!(parse("Summary.\n\nJust prose.").is_none());
        assert!(parse("Summary.\n\n    Args:\n        x: indented header.").is_none());
        assert!(parse("Summary.\n\nRaises:\n    ValueError: Always.").is_none());
    }
}
