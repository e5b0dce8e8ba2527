// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::{entries, generator::Request, template};

/// Generate a .gitignore with default data, additional entries, or templates
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Entries to add, eg `"dist,*.tmp"` or `"target node_modules"`.
    /// Giving entries implies --append.
    pub entries: Option<String>,

    /// Directory that holds the target .gitignore
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Additional .gitignore entry (can be repeated)
    #[arg(short, long = "data", value_name = "PATTERN")]
    pub data: Vec<String>,

    /// Use templates from gitignore.io (for example: python node java)
    #[arg(short, long = "template", value_name = "NAME", num_args = 1..)]
    pub templates: Vec<String>,

    /// Add to the existing .gitignore instead of overwriting it
    #[arg(short, long, default_value_t = false)]
    pub append: bool,

    /// Skip the prompt when a .gitignore already exists
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Print the existing .gitignore, then exit
    #[arg(short, long, default_value_t = false)]
    pub read: bool,

    /// Base URL of the template service
    #[arg(long, default_value = template::DEFAULT_API_URL)]
    pub api_url: String,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse() -> Self {
        <Args as Parser>::parse()
    }

    pub fn print_help() {
        let _ = <Args as CommandFactory>::command().print_help();
    }

    /// Folds the positional entries into the data list. Positional entries
    /// always switch the request to append mode, even alongside --force.
    pub fn to_request(&self) -> Request {
        let mut extra_entries = self.data.clone();
        let mut append = self.append;

        if let Some(raw) = &self.entries {
            append = true;
            extra_entries.extend(entries::normalize(raw));
        }

        Request {
            dir: self.path.clone(),
            templates: self.templates.clone(),
            extra_entries,
            append,
            force: self.force,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
