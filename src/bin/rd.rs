//! Command-line interface for rd
//! This binary runs one of the bundled grammars over some input and prints the parse tree,
//! the trace tree, or both.
//!
//! Usage:
//!   rd `<grammar>` `<input>` [--format `<format>`] [--trace `<mode>`]  - Parse the input text
//!   rd `<grammar>` --file `<path>`                                 - Parse a file's contents
//!   rd `<grammar>` --show-grammar                                  - Print the grammar rules
//!   rd --list-grammars | --list-formats                            - List what is available
//!
//! Settings come from the built-in defaults, then `rd.toml` in the working directory if
//! present, then `--config <path>`, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rd_config::{ConfigError, Loader, RdConfig};
use rd_parse::rd::formats::FormatRegistry;
use rd_parse::rd::grammars::{Grammar, GrammarOutput};
use rd_parse::rd::snapshot::TreeSnapshot;

fn main() {
    let matches = Command::new("rd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a recursive descent grammar and inspect its parse and trace trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("grammar")
                .help("Grammar to parse with (see --list-grammars)")
                .required_unless_present_any(["list-grammars", "list-formats"])
                .index(1),
        )
        .arg(
            Arg::new("input")
                .help("Text to parse")
                .index(2)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('i')
                .help("Read the text to parse from a file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .short('t')
                .help("When to print the trace tree")
                .value_parser(["never", "on-failure", "always"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("show-grammar")
                .long("show-grammar")
                .help("Print the grammar rules and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-grammars")
                .long("list-grammars")
                .help("List available grammars")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-grammars") {
        handle_list_grammars_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let name = matches
        .get_one::<String>("grammar")
        .expect("grammar is required unless listing");
    let grammar = Grammar::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown grammar '{}'", name);
        eprintln!("\nAvailable grammars:");
        for grammar in Grammar::all() {
            eprintln!("  {}", grammar.name());
        }
        std::process::exit(1);
    });

    if matches.get_flag("show-grammar") {
        println!("{}", grammar.notation().trim_matches('\n'));
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    if !registry.has(&config.output.format) {
        eprintln!("Unknown format '{}'", config.output.format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let source = read_source(&matches);
    let output = grammar.run(&source).unwrap_or_else(|e| {
        eprintln!("Lexing failed: {}", e);
        std::process::exit(1);
    });

    handle_parse_output(&output, &config, &registry);
}

fn load_config(matches: &ArgMatches) -> Result<RdConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file("rd.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(trace) = matches.get_one::<String>("trace") {
        loader = loader.set_override("output.trace", trace.as_str())?;
    }
    loader.build()
}

fn read_source(matches: &ArgMatches) -> String {
    if let Some(path) = matches.get_one::<String>("file") {
        return std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        });
    }
    match matches.get_one::<String>("input") {
        Some(input) => input.clone(),
        None => {
            eprintln!("Nothing to parse: pass the input text or --file <path>");
            std::process::exit(1);
        }
    }
}

/// Print the trees the configuration asks for; exits with status 1 if the parse failed.
fn handle_parse_output(output: &GrammarOutput, config: &RdConfig, registry: &FormatRegistry) {
    let format = config.output.format.as_str();
    let serialize = |tree: &TreeSnapshot| {
        registry.serialize(tree, format).unwrap_or_else(|e| {
            eprintln!("Error formatting tree: {}", e);
            std::process::exit(1);
        })
    };

    if let Some(tree) = &output.tree {
        print!("{}", serialize(tree));
    }

    if config.output.trace.shows(output.is_ok()) {
        if let Some(trace) = &output.trace {
            if output.tree.is_some() {
                println!();
            }
            print!("{}", serialize(trace));
        }
    }

    if let Some(err) = output.error {
        eprintln!("Parsing failed: {}", err);
        std::process::exit(1);
    }
}

fn handle_list_grammars_command() {
    println!("Available grammars:\n");
    for grammar in Grammar::all() {
        println!("  {}", grammar.name());
        println!("    {}", grammar.description());
        println!();
    }
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
