use clap::value_parser;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::fmt;

use orgfmt::formatting::{self, TAGS_COLUMN};
use orgfmt::loading;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("orgfmt")
        .version(VERSION)
        .propagate_version(true)
        .about("Write Org documents back out as canonical source text.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print debugging information to standard error."),
        )
        .subcommand(
            Command::new("format")
                .about("Render a parsed document tree as Org source")
                .arg(
                    Arg::new("tags-column")
                        .long("tags-column")
                        .value_parser(value_parser!(usize))
                        .default_value("77")
                        .help("Column to which trailing headline tags are right-aligned."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document tree, as JSON. Use '-' to read from standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            let tags_column = *submatches
                .get_one::<usize>("tags-column")
                .unwrap_or(&TAGS_COLUMN);

            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            debug!(?filename, tags_column);

            let content = match loading::load(filename) {
                Ok(content) => content,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error));
                    std::process::exit(1);
                }
            };

            let document = match loading::decode(filename, &content) {
                Ok(document) => document,
                Err(error) => {
                    eprintln!("{}", problem::full_loading_error(&error, &content));
                    std::process::exit(1);
                }
            };

            let result = formatting::render(&document, tags_column);
            print!("{}", result);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: orgfmt [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
