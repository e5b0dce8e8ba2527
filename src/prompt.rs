// src/prompt.rs
use dialoguer::Input;

use crate::error::{Error, Result};

/// Yes/no question asked before an existing `.gitignore` is overwritten.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Only an answer of `y` (any case, surrounding whitespace ignored) is a yes.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer: String = Input::new()
            .with_prompt(format!("{question} [y/N]"))
            .allow_empty(true)
            .interact_text()
            .map_err(Error::Prompt)?;
        Ok(is_yes(&answer))
    }
}

/// Answers every question the same way.
#[cfg(test)]
pub struct FixedConfirm {
    pub answer: String,
    pub asked: usize,
}

#[cfg(test)]
impl FixedConfirm {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            asked: 0,
        }
    }
}

#[cfg(test)]
impl Confirm for FixedConfirm {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        self.asked += 1;
        Ok(is_yes(&self.answer))
    }
}
