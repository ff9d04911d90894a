mod config;
mod output;
mod parse;
mod present;
mod prompt;
mod simulate;

use clap::Parser;
use pickrank_core::RankingState;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::parse::parse_pick_script;
use crate::present::{Outcome, PickSource, PromptStyle, run_session};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "pickrank", version, about = "Rank a list by picking the better of two, one pair at a time")]
struct Cli {
    /// Log engine transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank a list of items interactively
    Rank(RankArgs),
    /// Run simulated users through the engine and report pick counts
    Simulate(SimulateArgs),
    /// Create a default config file at ~/.config/pickrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one item per line, or a JSON array of strings
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline item (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Scripted picks instead of asking, e.g. "1,2,2,1"
    #[arg(long)]
    picks: Option<String>,

    /// Question shown above every pair
    #[arg(long)]
    question: Option<String>,

    /// Output JSON instead of a numbered list
    #[arg(long)]
    json: bool,

    /// Hide the placed/remaining counter
    #[arg(long)]
    no_progress: bool,

    /// Path to config file (default: ~/.config/pickrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct SimulateArgs {
    /// Number of items per ranking
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Number of rankings to simulate
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Probability that the simulated user answers against their own order
    #[arg(long, default_value_t = 0.0)]
    flip_rate: f64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Parse a string as either a JSON array of strings or plain text (one item per line).
fn parse_items_from_str(content: &str) -> Result<Vec<String>, String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let items: Vec<String> = serde_json::from_str(trimmed)
            .map_err(|e| format!("File looks like JSON but failed to parse: {e}"))?;
        Ok(items.into_iter().filter(|s| !s.trim().is_empty()).collect())
    } else {
        Ok(trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

fn ensure_rankable(items: &[String]) -> Result<(), String> {
    if items.len() < 2 {
        return Err(format!("Need at least 2 items to rank, got {}", items.len()));
    }
    Ok(())
}

/// Load items from all sources: --items file, --item inline args, or stdin.
/// Returns the items and whether they were read from stdin.
fn load_items(args: &RankArgs) -> (Vec<String>, bool) {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content).unwrap_or_else(|e| bail(e));
    }

    items.extend(args.inline_items.iter().cloned());

    // From stdin (only if no file and no inline items)
    let mut from_stdin = false;
    if items.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No items provided. Use --items <file>, --item <name>, or pipe items via stdin.");
        }
        let content: String = stdin
            .lock()
            .lines()
            .map(|l| l.unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}"))))
            .collect::<Vec<_>>()
            .join("\n");
        items = parse_items_from_str(&content).unwrap_or_else(|e| bail(e));
        from_stdin = true;
    }

    ensure_rankable(&items).unwrap_or_else(|e| bail(e));
    (items, from_stdin)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Simulate(args) => run_simulate(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to change the question, output format, etc.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let json = args.json || cfg.json.unwrap_or(false);
    let show_progress = !args.no_progress && cfg.show_progress.unwrap_or(true);
    let question = args
        .question
        .clone()
        .or(cfg.question)
        .unwrap_or_else(|| prompt::DEFAULT_QUESTION.to_string());

    let (items, from_stdin) = load_items(&args);

    let mut source = match args.picks.as_deref() {
        Some(script) => PickSource::scripted(
            parse_pick_script(script).unwrap_or_else(|e| bail(format!("Bad --picks value: {e}"))),
        ),
        None if from_stdin => bail("Items were piped via stdin, so picks can't be read from it. Pass --picks."),
        None => PickSource::Interactive,
    };

    tracing::info!(items = items.len(), "starting ranking session");

    let mut state = RankingState::new(items).unwrap_or_else(|e| bail(e));
    let style = PromptStyle { question: &question, show_progress };

    let stdin = io::stdin();
    match run_session(&mut state, &mut source, &mut stdin.lock(), &mut io::stderr(), &style) {
        Ok(Outcome::Complete) => {}
        Ok(Outcome::Abandoned) => {
            eprintln!("\nRanking abandoned after {} picks.", state.comparisons());
            std::process::exit(130);
        }
        Err(e) => bail(e),
    }

    let ranked = state.ranked_list();
    if json {
        output::print_json(&ranked, state.pool(), state.choices());
    } else {
        output::print_text(&ranked, state.comparisons());
    }
}

fn run_simulate(args: SimulateArgs) {
    if args.size < 2 {
        bail(format!("--size must be at least 2, got {}", args.size));
    }
    if args.trials == 0 {
        bail("--trials must be at least 1");
    }
    if !(0.0..=1.0).contains(&args.flip_rate) {
        bail(format!("--flip-rate must be between 0.0 and 1.0, got {}", args.flip_rate));
    }

    let report = simulate::run_simulation(args.size, args.trials, args.flip_rate, args.seed);
    simulate::print_report(&report, args.json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_one_per_line() {
        let items = parse_items_from_str("  Pizza \n\n   \nSushi\nTacos\n").unwrap();
        assert_eq!(items, vec!["Pizza", "Sushi", "Tacos"]);
    }

    #[test]
    fn test_parse_items_json_array_drops_blank_entries() {
        let items = parse_items_from_str(r#"["Pizza", "", "  ", "Sushi"]"#).unwrap();
        assert_eq!(items, vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn test_parse_items_bad_json_is_an_error() {
        let err = parse_items_from_str(r#"["Pizza", 3"#).unwrap_err();
        assert!(err.starts_with("File looks like JSON but failed to parse"), "got: {err}");
    }

    #[test]
    fn test_ensure_rankable_needs_two_items() {
        assert_eq!(
            ensure_rankable(&["only".to_string()]).unwrap_err(),
            "Need at least 2 items to rank, got 1"
        );
        assert!(ensure_rankable(&[]).is_err());
        assert!(ensure_rankable(&["a".to_string(), "b".to_string()]).is_ok());
    }

    #[test]
    fn test_cli_parses_rank_arguments() {
        let cli = Cli::try_parse_from(["pickrank", "-v", "rank", "--item", "a", "--item", "b", "--picks", "2"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Rank(args) => {
                assert_eq!(args.inline_items, vec!["a", "b"]);
                assert_eq!(args.picks.as_deref(), Some("2"));
                assert!(!args.json);
            }
            _ => panic!("expected the rank subcommand"),
        }
    }
}
