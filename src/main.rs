//! Lau Trie - command-line entrypoint.
//!
//! Loads configuration, initializes logging, and runs one of the word-trie
//! commands: a scripted demonstration, autocomplete, or exact lookup against
//! a word list.

use clap::{Parser, Subcommand};
use lau_trie_lib::completion::CompletionOutput;
use lau_trie_lib::config::{self, ConfigLoader, LauConfig, LogConfig};
use lau_trie_lib::data_structures::{LauTrie, PrefixMatches};
use lau_trie_lib::error::{
    set_error_reporter, ErrorContext, LauError, LauResult, TracingErrorReporter,
};
use lau_trie_lib::wordlist;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for Lau Trie.
#[derive(Parser, Debug)]
#[clap(name = "lau_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert a sample vocabulary and walk through search, autocomplete and delete
    Demo,

    /// List the words in a word list that start with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Newline-separated word list; `word<TAB>value` lines attach a value
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Check whether a word is in a word list
    Search {
        /// Word to look up
        word: String,

        /// Newline-separated word list; `word<TAB>value` lines attach a value
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> LauResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_trie(words: &Path) -> LauResult<LauTrie<String>> {
    let mut trie = lau_trie_lib::trie_from_global_config();
    let stats = wordlist::load_entry_file(&mut trie, words)?;
    info!(
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        "Loaded word list {:?}",
        words
    );
    Ok(trie)
}

fn print_matches(heading: &str, matches: &PrefixMatches) {
    println!("{heading}: {}", matches.count());
    for word in matches.words() {
        println!("  - {word}");
    }
    if matches.is_truncated() {
        println!("  (more matches not shown)");
    }
}

fn run_demo() -> LauResult<()> {
    let mut trie: LauTrie = lau_trie_lib::trie_from_global_config();

    println!("--- Inserting words ---");
    for word in ["cat", "car", "card", "care", "careful", "apple", "app", "apply"] {
        trie.insert(word)?;
        println!("Inserted: {word}");
    }
    print_matches("\nAll words", &trie.enumerate_all());

    println!("\n--- Searching for exact words ---");
    for word in ["car", "care", "ca"] {
        let mark = if trie.search(word)? { "Found" } else { "Not found" };
        println!("{mark}: '{word}'");
    }

    println!("\n--- Prefix search ---");
    print_matches("Words starting with 'car'", &trie.prefix_search("car")?);
    print_matches("Words starting with 'app'", &trie.prefix_search("app")?);

    println!("\n--- Deleting 'car' ---");
    trie.delete("car")?;
    if !trie.search("car")? {
        println!("'car' successfully deleted");
    }
    print_matches("Words starting with 'car'", &trie.prefix_search("car")?);

    let released = trie.teardown();
    println!("\nTrie released ({released} nodes).");
    Ok(())
}

fn run_complete(prefix: &str, words: &Path, json: bool) -> LauResult<()> {
    let trie = load_trie(words)?;
    let matches = trie.prefix_search(prefix)?;
    let output = CompletionOutput::new(prefix, &matches);

    if json {
        println!("{}", output.to_json()?);
    } else {
        print!("{output}");
    }
    Ok(())
}

fn run_search(word: &str, words: &Path) -> LauResult<bool> {
    let trie = load_trie(words)?;
    let found = trie.search(word)?;
    match (trie.label(word)?, trie.value(word)?) {
        (Some(label), Some(value)) => println!("Found: '{label}' ({value})"),
        (Some(label), None) => println!("Found: '{label}'"),
        _ => println!("Not found: '{word}'"),
    }
    Ok(found)
}

fn generate_config(output: &Path) -> LauResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LauConfig::default())
        .map_err(|e| LauError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> LauResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = config_loader.load();

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Demo);

    if let Command::GenConfig { output } = &command {
        return generate_config(output);
    }

    match loaded {
        Ok(config) => config::init_global_config(config),
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }

    let result = match command {
        Command::Demo => run_demo(),
        Command::Complete {
            prefix,
            words,
            json,
        } => run_complete(&prefix, &words, json),
        Command::Search { word, words } => match run_search(&word, &words) {
            Ok(true) => Ok(()),
            Ok(false) => process::exit(1),
            Err(e) => Err(e),
        },
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    };

    if let Err(e) = result {
        lau_trie_lib::error::get_error_reporting()
            .report(ErrorContext::new(e, "cli").with_details("command failed"));
        process::exit(2);
    }

    Ok(())
}
