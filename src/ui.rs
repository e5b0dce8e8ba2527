// src/ui.rs
use std::path::Path;

use colored::{ColoredString, Colorize};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Icon {
    Start,
    Write,
    Done,
    Error,
    Prompt,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Start => "🚀",
            Icon::Write => "📝",
            Icon::Done => "✅",
            Icon::Error => "❌",
            Icon::Prompt => "❔",
        }
    }
}

pub fn start(message: &str) {
    println!("{} {}", Icon::Start.glyph(), message.bold().blue());
}

pub fn success(message: &str, path: &Path) {
    println!(
        "{} {} {}",
        Icon::Done.glyph(),
        message.bold().green(),
        path.display()
    );
}

pub fn error(message: &str) {
    eprintln!("{} {}", Icon::Error.glyph(), message.bold().red());
}

pub fn cancelled() {
    println!("{}", "Cancelled.".yellow());
}

pub fn overwrite_question(path: &Path) -> String {
    format!(
        "{} File .gitignore already exists at {}. Overwrite?",
        Icon::Prompt.glyph(),
        path.display()
    )
}

/// Colours one `.gitignore` line by its shape: comments dimmed, negations
/// yellow, directory patterns blue.
pub fn highlight_line(line: &str) -> ColoredString {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        line.dimmed()
    } else if trimmed.starts_with('!') {
        line.yellow()
    } else if trimmed.ends_with('/') {
        line.blue()
    } else {
        line.normal()
    }
}

/// Prints file content under a title bar, one highlighted line at a time.
pub fn show_file(path: &Path, content: &str) {
    let title = format!("{} Content of {}", Icon::Write.glyph(), path.display());
    let rule = "─".repeat(title.chars().count().max(20));

    println!("{}", title.bold().blue());
    println!("{}", rule.blue());
    for line in content.lines() {
        println!("{}", highlight_line(line));
    }
    println!("{}", rule.blue());
}
