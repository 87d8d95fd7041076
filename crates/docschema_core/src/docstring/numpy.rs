//! Numpy-style docstrings (underlined `Parameters` / `Returns` sections).

use super::text::{
    Entry, bare_name, group_entries, indent_of, join_wrapped, split_description, strip_optional,
};
use super::{DocReturn, ParsedDocstring};
use crate::types::TypeToken;
use regex::Regex;
use std::sync::LazyLock;

static RE_UNDERLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());

// `name : type`, `name :` or a bare `name`; `x1, x2 : type` names several.
static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w*][\w*, ]*?)\s*(?::\s*(.*))?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Parameters,
    Returns,
    Other,
}

/// Finds underlined section headers as `(header line index, section)`.
fn find_sections(lines: &[&str]) -> Vec<(usize, Section)> {
    lines
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let (title, underline) = (pair[0], pair[1]);
            if title.trim().is_empty()
                || indent_of(title) != 0
                || RE_UNDERLINE.is_match(title)
                || !RE_UNDERLINE.is_match(underline)
            {
                return None;
            }
            let section = match title.trim() {
                "Parameters" => Section::Parameters,
                "Returns" => Section::Returns,
                _ => Section::Other,
            };
            Some((index, section))
        })
        .collect()
}

/// Parses a Numpy-style docstring, or returns `None` when it has neither a
/// `Parameters` nor a `Returns` section.
pub(crate) fn parse(text: &str) -> Option<ParsedDocstring> {
    let lines: Vec<&str> = text.lines().collect();
    let sections = find_sections(&lines);

    if !sections
        .iter()
        .any(|(_, section)| matches!(section, Section::Parameters | Section::Returns))
    {
        return None;
    }

    let (short_description, long_description) = split_description(&lines[..sections[0].0]);
    let mut parsed = ParsedDocstring::new(short_description, long_description);

    for (position, &(start, section)) in sections.iter().enumerate() {
        let end = sections
            .get(position + 1)
            .map_or(lines.len(), |&(next, _)| next);
        let entries = group_entries(&lines[start + 2..end]);
        match section {
            Section::Parameters => parse_parameters(&entries, &mut parsed),
            Section::Returns => parse_returns(&entries, &mut parsed),
            Section::Other => {}
        }
    }

    Some(parsed)
}

fn parse_parameters(entries: &[Entry<'_>], parsed: &mut ParsedDocstring) {
    for entry in entries {
        let Some(caps) = RE_PARAM.captures(entry.head) else {
            continue;
        };
        let Some(names) = caps.get(1) else { continue };
        let type_token = caps
            .get(2)
            .and_then(|m| TypeToken::parse(strip_optional(m.as_str())));
        let description = join_wrapped(entry.body.iter().copied());

        for name in names.as_str().split(',').map(bare_name) {
            if name.is_empty() {
                continue;
            }
            let param = parsed.param_entry(name);
            param.type_token.clone_from(&type_token);
            param.description.clone_from(&description);
        }
    }
}

fn parse_returns(entries: &[Entry<'_>], parsed: &mut ParsedDocstring) {
    let Some(first) = entries.first() else {
        return;
    };

    // `name : type` names the value; `name :` leaves it untyped; a bare
    // header is the type itself.
    let head = first.head.trim_end();
    let type_text = match head.split_once(" : ") {
        Some((_, type_text)) => type_text,
        None if head.ends_with(':') => "",
        None => head,
    };

    parsed.returns = Some(DocReturn {
        description: join_wrapped(first.body.iter().copied()),
        type_token: TypeToken::parse(type_text),
    });
}
