//! Line-level helpers shared by the docstring detectors.

const TAB_WIDTH: usize = 8;

/// Normalizes raw documentation text before detection.
///
/// Tabs are expanded, the first line is left-trimmed, the common indentation
/// of the remaining lines is removed, trailing whitespace is stripped and
/// leading/trailing blank lines are dropped. Rust doc comments (one leading
/// space per line) and indented source docstrings both come out flush left.
pub(crate) fn clean(raw: &str) -> String {
    let expanded: Vec<String> = raw.lines().map(expand_tabs).collect();

    let margin = expanded
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = expanded
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.trim()
            } else if line.trim().is_empty() {
                ""
            } else {
                line[margin..].trim_end()
            }
        })
        .collect();

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Number of leading spaces.
pub(crate) fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut expanded = String::with_capacity(line.len() + TAB_WIDTH);
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - expanded.chars().count() % TAB_WIDTH;
            expanded.extend(core::iter::repeat_n(' ', pad));
        } else {
            expanded.push(ch);
        }
    }
    expanded
}

/// Splits leading description lines into short and long descriptions.
///
/// The short description is the first paragraph; the long description is
/// every later paragraph, separated by a blank line. Wrapped lines inside a
/// paragraph are joined with single spaces.
pub(crate) fn split_description(lines: &[&str]) -> (String, Option<String>) {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    let mut paragraphs = paragraphs.into_iter();
    let short = paragraphs.next().unwrap_or_default();
    let rest: Vec<String> = paragraphs.collect();
    let long = (!rest.is_empty()).then(|| rest.join("\n\n"));
    (short, long)
}

/// Joins the non-blank pieces of a wrapped description with single spaces.
pub(crate) fn join_wrapped<'a>(pieces: impl IntoIterator<Item = &'a str>) -> String {
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A block of lines opened by a line at the block's base indentation,
/// followed by its more deeply indented continuation lines.
#[derive(Debug)]
pub(crate) struct Entry<'a> {
    pub head: &'a str,
    pub body: Vec<&'a str>,
}

/// Groups section lines into entries.
///
/// The base indentation is that of the first non-blank line. Any non-blank
/// line at or left of it opens a new entry.
pub(crate) fn group_entries<'a>(lines: &[&'a str]) -> Vec<Entry<'a>> {
    let Some(base) = lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .map(|line| indent_of(line))
    else {
        return Vec::new();
    };

    let mut entries: Vec<Entry<'a>> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if indent_of(line) <= base {
            entries.push(Entry {
                head: line.trim(),
                body: Vec::new(),
            });
        } else if let Some(entry) = entries.last_mut() {
            entry.body.push(line.trim());
        }
    }
    entries
}

/// Strips `*args` / `**kwargs` stars from a parameter name.
pub(crate) fn bare_name(name: &str) -> &str {
    name.trim().trim_start_matches('*')
}

/// Drops a trailing `, optional` or `, default ...` annotation from type text.
///
/// Optionality written in a docstring is informational only.
pub(crate) fn strip_optional(type_text: &str) -> &str {
    let trimmed = type_text.trim();
    match trimmed.rsplit_once(',') {
        Some((head, tail)) if is_optional_marker(tail) => head.trim_end(),
        _ => trimmed,
    }
}

fn is_optional_marker(text: &str) -> bool {
    let text = text.trim();
    text == "optional" || text.starts_with("default")
}
