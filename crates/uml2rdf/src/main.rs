use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use uml2rdf::config::ConvertConfig;
use uml2rdf::converter::run_pipeline;
use uml2rdf::emitter::NQuadsEmitter;
use uml2rdf::extraction::loader::load_model;

/// Convert annotated UML model graphs to RDF vocabularies.
#[derive(Parser)]
#[command(name = "uml2rdf", version, about)]
struct Cli {
    /// Path to a model document (JSON).
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Language code attributed to tags without a language suffix.
    #[arg(short, long, value_name = "CODE", default_value = "nl")]
    language: String,

    /// Also emit unrecognized tags under the passthrough predicate.
    #[arg(long)]
    all_tags: bool,

    /// URI prefix of the publication environment, used to classify scope.
    #[arg(
        long,
        value_name = "URI",
        default_value = "https://data.example.org/"
    )]
    publication_environment: String,

    /// Base URI assigned to packages lacking an explicit base-URI tag.
    #[arg(
        long,
        value_name = "URI",
        default_value = "https://fallback.example.org/ns/"
    )]
    fallback_base_uri: String,

    /// Downgrade missing-value errors to log messages.
    #[arg(long)]
    debug: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConvertConfig {
        language: cli.language.clone(),
        all_tags: cli.all_tags,
        publication_environment: cli.publication_environment.clone(),
        debug: cli.debug,
        fallback_base_uri: cli.fallback_base_uri.clone(),
    };

    let mut model = load_model(&cli.input)?;
    let store = run_pipeline(&config, &mut model)?;

    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut emitter = NQuadsEmitter::new(output_writer);
    emitter.emit_all(store.iter())?;
    emitter.flush()?;

    if !cli.quiet {
        eprintln!(
            "Converted {} quads from {}",
            emitter.quad_count(),
            cli.input.display()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
