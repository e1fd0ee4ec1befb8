//! Command-line interface for constyaml
//! Converts a file of constant declarations into a YAML (or JSON) document.
//!
//! Usage:
//!   constyaml `<input_file>` `<output_file>` [--format `<format>`] [--config `<toml>`] [-v]...
mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use constyaml_config::{ConstyamlConfig, Loader as ConfigLoader};
use constyaml_parser::Loader;

/// Picked up from the working directory when present.
const LOCAL_CONFIG_FILE: &str = "constyaml.toml";

fn main() {
    let matches = Command::new("constyaml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert constyaml constant declarations to YAML or JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input_file")
                .help("Path to the input file with constant declarations")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output_file")
                .help("Path to the output file to write")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format; 'auto' picks JSON for .json files, YAML otherwise")
                .value_parser(["auto", "yaml", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults and ./constyaml.toml"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output (repeatable)")
                .action(ArgAction::Count),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {}", e);
        std::process::exit(1);
    });

    let verbosity = matches.get_count("verbose");
    logging::init(config.logging.level.raised(verbosity));

    let input = matches
        .get_one::<String>("input_file")
        .expect("input_file is required");
    let output = matches
        .get_one::<String>("output_file")
        .expect("output_file is required");
    handle_convert_command(input, output, &config);
}

/// Defaults, then `./constyaml.toml`, then the `--config` file, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<ConstyamlConfig, constyaml_config::ConfigError> {
    let mut loader = ConfigLoader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the conversion
fn handle_convert_command(input: &str, output: &str, config: &ConstyamlConfig) {
    let format = config.output.format.resolve(output);
    tracing::debug!(input, output, %format, "converting");

    if let Err(e) = Loader::new().convert(input, output, format) {
        tracing::debug!(error = ?e, "conversion failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Configuration successfully converted to {}.", output);
}
