// src/generator.rs
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    defaults,
    error::{Error, Result},
    prompt::Confirm,
    template::{self, TemplateSource},
    ui,
};

pub const GITIGNORE: &str = ".gitignore";

/// Everything needed to produce one `.gitignore`.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub dir: PathBuf,
    pub templates: Vec<String>,
    pub extra_entries: Vec<String>,
    pub append: bool,
    pub force: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Appended(PathBuf),
    Cancelled,
}

pub fn gitignore_path(dir: &Path) -> PathBuf {
    dir.join(GITIGNORE)
}

/// Template lines, then defaults, then extras. Nothing is removed or reordered.
pub fn assemble(template: &[String], defaults: &[String], extras: &[String]) -> Vec<String> {
    template
        .iter()
        .chain(defaults)
        .chain(extras)
        .cloned()
        .collect()
}

pub fn render(entries: &[String]) -> String {
    let mut content = entries.join("\n");
    content.push('\n');
    content
}

pub struct Generator<'a> {
    source: &'a dyn TemplateSource,
    confirm: &'a mut dyn Confirm,
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a dyn TemplateSource, confirm: &'a mut dyn Confirm) -> Self {
        Self { source, confirm }
    }

    pub fn entries_for(&self, request: &Request) -> Vec<String> {
        let template = template::fetch_template(self.source, &request.templates);
        assemble(&template, defaults::default_entries(), &request.extra_entries)
    }

    /// Builds the pattern list and writes it according to the request's
    /// append/force policy. Only a declined overwrite prompt skips the write.
    pub fn generate(&mut self, request: &Request) -> Result<Outcome> {
        let entries = self.entries_for(request);
        let path = gitignore_path(&request.dir);
        let exists = path.exists();

        if exists && !request.append && !request.force {
            let question = ui::overwrite_question(&path);
            let proceed = self.confirm.confirm(&question).unwrap_or_else(|e| {
                log::warn!("{e}");
                false
            });
            if !proceed {
                return Ok(Outcome::Cancelled);
            }
        }

        let content = render(&entries);
        if request.append && exists {
            append_content(&path, &content)?;
            log::info!("appended {} entries to {}", entries.len(), path.display());
            Ok(Outcome::Appended(path))
        } else {
            fs::write(&path, &content).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {} entries to {}", entries.len(), path.display());
            Ok(Outcome::Written(path))
        }
    }
}

fn append_content(path: &Path, content: &str) -> Result<()> {
    let to_write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(to_write_err)?;
    file.write_all(format!("\n{content}").as_bytes())
        .map_err(to_write_err)
}

/// Returns the current `.gitignore` text in `dir` without touching it.
pub fn read_gitignore(dir: &Path) -> Result<String> {
    let path = gitignore_path(dir);
    if !path.exists() {
        return Err(Error::NotFound(path));
    }
    fs::read_to_string(&path).map_err(|source| Error::Read { path, source })
}
