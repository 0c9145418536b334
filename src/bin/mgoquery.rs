//! Command-line interface for mgoquery
//! This binary compiles queries into filter documents, or shows the intermediate stages.
//!
//! Usage:
//!   mgoquery parse `<query>` [--format `<format>`]  - Compile a query (`-` reads it from stdin)
//!   mgoquery list-formats                       - List all available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use mgoquery::processor::{available_formats, process_str, ProcessingError, ProcessingSpec};
use mgoquery::ParserOptions;
use std::io::Read;

fn main() {
    let matches = Command::new("mgoquery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile terse queries into MongoDB filter documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages (RUST_LOG overrides)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Compile a query and print the result")
                .arg(
                    Arg::new("query")
                        .help("The query, or '-' to read it from stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'filter', 'token-simple', 'ast-treeviz')")
                        .default_value("filter"),
                )
                .arg(
                    Arg::new("remove-all-whitespaces")
                        .long("remove-all-whitespaces")
                        .help("Also remove whitespace inside quoted literals")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("options")
                        .long("options")
                        .help("Parser options as JSON, e.g. '{\"removeAllWhitespaces\": true}'"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let result = read_query(matches).and_then(|query| {
        let options = resolve_options(
            matches.get_one::<String>("options").map(String::as_str),
            matches.get_flag("remove-all-whitespaces"),
        )?;
        let format = matches
            .get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("filter");
        let spec = ProcessingSpec::from_string(format).map_err(|e| e.to_string())?;
        process_str(&query, &spec, &options).map_err(|e: ProcessingError| e.to_string())
    });

    match result {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}

fn read_query(matches: &ArgMatches) -> Result<String, String> {
    let query = matches
        .get_one::<String>("query")
        .ok_or_else(|| "missing query".to_string())?;
    if query != "-" {
        return Ok(query.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("reading stdin: {}", e))?;
    Ok(buffer)
}

/// JSON options first, then the command-line flag on top
fn resolve_options(
    json: Option<&str>,
    remove_all_whitespaces: bool,
) -> Result<ParserOptions, String> {
    let options = match json {
        Some(json) => {
            ParserOptions::from_json(json).map_err(|e| format!("invalid options: {}", e))?
        }
        None => ParserOptions::default(),
    };
    if remove_all_whitespaces {
        Ok(options.with_remove_all_whitespaces(true))
    } else {
        Ok(options)
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
