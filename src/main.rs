use std::{env, process};


mod args;
mod defaults;
mod entries;
mod error;
mod generator;
mod prompt;
mod template;
mod ui;

use generator::{Generator, Outcome};

fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Reads and displays the target `.gitignore`.
fn run_read(args: &args::Args) {
    match generator::read_gitignore(&args.path) {
        Ok(content) => ui::show_file(&generator::gitignore_path(&args.path), &content),
        Err(e) => ui::error(&e.to_string()),
    }
}

fn run_generate(args: &args::Args) {
    let request = args.to_request();
    log::debug!("{request:?}");

    ui::start("Starting to make .gitignore ...");

    let source = template::HttpTemplateSource::new(args.api_url.clone());
    let mut confirm = prompt::StdinConfirm;
    let mut generator = Generator::new(&source, &mut confirm);

    match generator.generate(&request) {
        Ok(Outcome::Written(path)) | Ok(Outcome::Appended(path)) => {
            ui::success(".gitignore successfully stored at:", &path)
        }
        Ok(Outcome::Cancelled) => ui::cancelled(),
        Err(e) => ui::error(&format!("Failed to make .gitignore: {e}")),
    }
}

fn main() {
    if env::args_os().len() <= 1 {
        args::Args::print_help();
        process::exit(1);
    }

    let args = args::Args::parse();
    init_logging(args.log_level());

    if args.read {
        run_read(&args);
    } else {
        run_generate(&args);
    }
}
