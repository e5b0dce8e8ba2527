// src/entries.rs
//! Turns the free-form positional `entries` argument into individual patterns.
//!
//! Delimiter detection is an ordered rule table: the first rule whose
//! predicate accepts the whole (slash-normalized) input decides how it is
//! split. The order of [`RULES`] is the contract.

use once_cell::sync::Lazy;
use regex::Regex;

pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub split: fn(&str) -> Vec<String>,
}

// `[a,b]` or `{a,b}`, captured without the outer pair
static BRACKETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:\[(.*)\]|\{(.*)\})$").expect("bracket pattern is valid")
});

// "a", 'a' or `a`; the regex crate has no backreferences so each pair is spelled out
static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^(?:"(.*)"|'(.*)'|`(.*)`)$"#).expect("quote pattern is valid")
});

fn first_capture<'a>(re: &Regex, s: &'a str) -> Option<&'a str> {
    re.captures(s)
        .and_then(|caps| caps.iter().skip(1).flatten().next())
        .map(|m| m.as_str())
}

// Only a plain comma list counts as bracketed; anything with a later
// delimiter keeps the regular rule order.
fn is_bracketed_list(s: &str) -> bool {
    first_capture(&BRACKETED, s)
        .is_some_and(|inner| !inner.contains(['\n', ';', ':', '|', ' ']))
}

/// Splits on `\n`, `\r\n` and bare `\r`; a trailing line break adds no entry.
fn split_lines(s: &str) -> Vec<String> {
    let mut lines: Vec<String> = s
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

fn split_on(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter).map(str::to_string).collect()
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "bracketed list",
        matches: is_bracketed_list,
        split: |s: &str| split_on(first_capture(&BRACKETED, s).unwrap_or(s), ','),
    },
    Rule {
        name: "comma",
        matches: |s: &str| s.contains(','),
        split: |s: &str| split_on(s, ','),
    },
    Rule {
        name: "newline",
        matches: |s: &str| s.contains('\n'),
        split: split_lines,
    },
    Rule {
        name: "semicolon",
        matches: |s: &str| s.contains(';'),
        split: |s: &str| split_on(s, ';'),
    },
    Rule {
        name: "colon",
        matches: |s: &str| s.contains(':'),
        split: |s: &str| split_on(s, ':'),
    },
    Rule {
        name: "pipe",
        matches: |s: &str| s.contains('|'),
        split: |s: &str| split_on(s, '|'),
    },
    Rule {
        name: "whitespace",
        matches: |s: &str| s.contains(' '),
        split: |s: &str| s.split_whitespace().map(str::to_string).collect(),
    },
    Rule {
        name: "quoted literal",
        matches: |s: &str| QUOTED.is_match(s),
        split: |s: &str| vec![first_capture(&QUOTED, s).unwrap_or(s).to_string()],
    },
    Rule {
        name: "literal",
        matches: |s: &str| !s.trim().is_empty(),
        split: |s: &str| vec![s.trim().to_string()],
    },
];

/// Splits `raw` into patterns using the first matching rule in [`RULES`].
/// Backslashes become forward slashes before any rule is consulted.
pub fn normalize(raw: &str) -> Vec<String> {
    let normalized = raw.replace('\\', "/");

    match RULES.iter().find(|rule| (rule.matches)(&normalized)) {
        Some(rule) => {
            log::debug!("entries {normalized:?} matched rule '{}'", rule.name);
            (rule.split)(&normalized)
        }
        // Blank input is kept as a single entry
        None => vec![normalized],
    }
}
