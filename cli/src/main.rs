//! respace CLI - spacing normalization for mixed CJK/Latin text
//!
//! Normalizes spacing in text given as an argument, line-by-line from a file
//! or stdin, or over an ordered fragment list with boundaries preserved.

use clap::{Parser, Subcommand};
use respace::{
    insert_space_batch_with, insert_text_space_with, insert_text_space_with_words_categories,
    SpaceCategory,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Spacing normalization for mixed CJK/Latin text
#[derive(Parser)]
#[command(
    name = "respace",
    author = "iyulab",
    version,
    about = "Normalize spacing in mixed CJK/Latin text",
    long_about = "respace - spacing normalization for mixed-script text.\n\n\
                  Usage:\n  \
                  respace <text>                 Normalize a single text\n  \
                  respace batch <file>           Normalize each line of a file\n  \
                  respace batch                  Normalize each line from stdin\n  \
                  respace words <fragments>...   Re-space fragments, keeping boundaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to normalize (default command)
    input: Option<String>,

    /// Rule categories to apply (comma-separated, e.g. BRACKET,HYPHEN_SLASH)
    #[arg(long, global = true, value_delimiter = ',')]
    categories: Vec<String>,

    /// Emit JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize spacing in a single text
    Space {
        /// Input text
        text: String,
    },

    /// Normalize each line read from a file (or stdin when omitted)
    Batch {
        /// Input file path
        file: Option<PathBuf>,
    },

    /// Re-space an ordered fragment sequence, preserving its boundaries
    Words {
        /// Input fragments, in order
        fragments: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let categories = resolve_categories(&cli.categories);

    let result = match cli.command {
        Some(Commands::Space { text }) => run_space(&text, &categories, cli.json),
        Some(Commands::Batch { file }) => run_batch(file.as_deref(), &categories, cli.json),
        Some(Commands::Words { fragments }) => run_words(&fragments, &categories, cli.json),
        None => match cli.input {
            Some(text) => run_space(&text, &categories, cli.json),
            None => {
                eprintln!("Error: no input text. Try 'respace --help'.");
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parses category names, warning on unknown ones (they are ignored, not
/// fatal; an empty selection means the full rule set).
fn resolve_categories(names: &[String]) -> Vec<SpaceCategory> {
    let mut categories = Vec::new();
    for name in names {
        match name.parse::<SpaceCategory>() {
            Ok(category) => categories.push(category),
            Err(err) => eprintln!("Warning: {err} (ignored)"),
        }
    }
    categories
}

fn run_space(text: &str, categories: &[SpaceCategory], json: bool) -> io::Result<()> {
    let spaced = insert_text_space_with(text, categories);
    if json {
        println!("{}", serde_json::to_string(&spaced)?);
    } else {
        println!("{spaced}");
    }
    Ok(())
}

fn run_batch(file: Option<&std::path::Path>, categories: &[SpaceCategory], json: bool) -> io::Result<()> {
    let lines: Vec<String> = match file {
        Some(path) => fs::read_to_string(path)?.lines().map(str::to_string).collect(),
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };

    let spaced = insert_space_batch_with(&lines, categories);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(&spaced)?)?;
    } else {
        for line in spaced {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn run_words(fragments: &[String], categories: &[SpaceCategory], json: bool) -> io::Result<()> {
    let spaced = insert_text_space_with_words_categories(fragments, categories);
    if json {
        println!("{}", serde_json::to_string(&spaced)?);
    } else {
        // Plain output joins the fragments; use --json to see the boundaries
        println!("{}", spaced.concat());
    }
    Ok(())
}
