//! CLI entry point for treemark

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use treemark::{
    Defaults, Error, FilterMode, Overrides, TreeRenderer, markdown_path, print_tree, resolve,
    text_path, write_markdown, write_text,
};

#[derive(Parser, Debug)]
#[command(name = "treemark")]
#[command(about = "Generate an ASCII tree of a directory and save it as Markdown and TXT files")]
#[command(version)]
struct Args {
    /// Directory to render (falls back to the configured default path)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Filter mode: include only, or exclude, the listed extensions
    #[arg(long, value_enum)]
    mode: Option<FilterMode>,

    /// Extensions to include (e.g. .py .txt); used only in include mode
    #[arg(long, num_args = 0..)]
    include: Option<Vec<String>>,

    /// Extensions to exclude (e.g. .jpg .png); used only in exclude mode
    #[arg(long, num_args = 0..)]
    exclude: Option<Vec<String>>,

    /// Folder names to leave out of the tree, case-insensitive (e.g. .git target)
    #[arg(long = "exclude-folders", num_args = 0..)]
    exclude_folders: Option<Vec<String>>,

    /// TOML file with default values for the options above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the tree without writing the Markdown and text files
    #[arg(long = "no-save")]
    no_save: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            path: self.path.clone(),
            mode: self.mode,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            exclude_folders: self.exclude_folders.clone(),
        }
    }
}

/// Outcome of a run that got as far as rendering.
enum Outcome {
    Saved,
    SaveFailed,
}

fn run(args: &Args) -> Result<Outcome, Error> {
    let mut defaults = Defaults::builtin();
    if let Some(ref file) = args.config {
        log::debug!("loading defaults from {}", file.display());
        defaults = defaults.merge(Defaults::from_file(file)?);
    }

    let resolved = resolve(args.overrides(), defaults)?;
    let lines = TreeRenderer::new(resolved.config).render(&resolved.root)?;

    if let Err(e) = print_tree(&lines) {
        log::warn!("could not print tree to stdout: {}", e);
    }

    if args.no_save {
        return Ok(Outcome::Saved);
    }

    let mut outcome = Outcome::Saved;

    let md_path = markdown_path(&resolved.root);
    match write_markdown(&lines, &md_path) {
        Ok(()) => println!("Markdown file saved to: {}", md_path.display()),
        Err(e) => {
            eprintln!("Failed to save Markdown file: {}", e);
            outcome = Outcome::SaveFailed;
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let txt_path = text_path(&cwd, &resolved.root);
    match write_text(&lines, &txt_path) {
        Ok(()) => println!("Text file saved to: {}", txt_path.display()),
        Err(e) => {
            eprintln!("Failed to save Text file: {}", e);
            outcome = Outcome::SaveFailed;
        }
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::Saved) => ExitCode::SUCCESS,
        Ok(Outcome::SaveFailed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
