// src/defaults.rs
use once_cell::sync::Lazy;

const DEFAULT_ENTRIES_CONFIG: &str = include_str!("defaults.cfg");

/// Built-in patterns, in file order.
pub static DEFAULT_ENTRIES: Lazy<Vec<String>> =
    Lazy::new(|| parse_entries(DEFAULT_ENTRIES_CONFIG));

fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn default_entries() -> &'static [String] {
    &DEFAULT_ENTRIES
}
