//! Searcher binary entry point

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use shared::logging::{self, log_error, log_shutdown, log_startup};
use shared::{component_error, component_warn, Component, SearchConfig};
use searcher::core::command::{parse_line, HELP};
use searcher::core::presentation;
use searcher::core::sequence::fizz_buzz;
use searcher::{ControllerEvent, GithubClient, SearchController, SearcherResult};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Debounced GitHub account search in the terminal")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive account search (default)
    Search(SearchArgs),

    /// Print the FizzBuzz classification of 1..=BOUND
    Sequence {
        #[arg(allow_negative_numbers = true)]
        bound: i64,
    },
}

#[derive(clap::Args, Default)]
struct SearchArgs {
    /// Search endpoint URL (overrides GITHUB_SEARCH_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Debounce delay in milliseconds (overrides SEARCH_DEBOUNCE_MS)
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Results per page, 1-100 (overrides SEARCH_PER_PAGE)
    #[arg(long)]
    per_page: Option<u32>,
}

#[tokio::main]
async fn main() -> SearcherResult<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    match args.command.unwrap_or(Command::Search(SearchArgs::default())) {
        Command::Sequence { bound } => {
            let mut out = std::io::stdout().lock();
            for item in fizz_buzz(bound)? {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        Command::Search(search) => {
            let result = run_search(search).await;
            if let Err(e) = &result {
                log_error(Component::Cli, "Search session", e);
            }
            result
        }
    }
}

fn load_config(args: &SearchArgs) -> SearcherResult<SearchConfig> {
    let mut config = SearchConfig::from_env()?;

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(millis) = args.debounce_ms {
        config = config.with_debounce(Duration::from_millis(millis));
    }
    if let Some(per_page) = args.per_page {
        config = config.with_per_page(per_page)?;
    }

    Ok(config)
}

async fn run_search(args: SearchArgs) -> SearcherResult<()> {
    let config = load_config(&args)?;
    log_startup(
        Component::Cli,
        &format!("account search against {} (debounce {:?})", config.endpoint, config.debounce),
    );

    let debounce = config.debounce;
    let client = GithubClient::new(config)?;
    let controller = SearchController::new(client, debounce);

    let (tx, rx) = mpsc::channel(64);
    spawn_input_reader(tx);

    println!("{HELP}");

    let mut last_frame = String::new();
    let final_state = controller
        .run(rx, |state| {
            let frame = presentation::render(state);
            if frame != last_frame {
                println!("\n{frame}");
                last_frame = frame;
            }
        })
        .await;

    log_shutdown(
        Component::Cli,
        &format!("{} account(s) on screen", final_state.accounts.len()),
    );
    Ok(())
}

/// Read stdin on a plain thread so a pending read never blocks runtime shutdown
fn spawn_input_reader(tx: mpsc::Sender<ControllerEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    component_error!(Component::Cli, error = %e, "Failed to read stdin");
                    break;
                }
            };

            match parse_line(&line) {
                Ok(event) => {
                    if tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    component_warn!(Component::Cli, error = %e, "Ignoring input");
                    eprintln!("{e}\n{HELP}");
                }
            }
        }
    });
}
