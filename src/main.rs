// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's event feed from GitHub
// 3. Print one line per event (or dump the feed to a JSON file)
// 4. Exit with a proper code:
//    0 = success (also: unknown user, no username given)
//    1 = some events were skipped because they were malformed
//    2 = error (network, bad JSON, unexpected HTTP status, ...)
//
// Logging goes to stderr via tracing, so stdout only ever carries the
// rendered activity lines.
// =============================================================================

mod activity;
mod cli;
mod dump;
mod error;
mod github;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use github::FetchOutcome;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", error::describe_chain(&e));
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins when set; otherwise warnings only, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let Some(username) = cli.username() else {
        println!("{}", cli::USAGE);
        return Ok(0);
    };

    let config = cli.client_config()?;

    let body = match github::fetch_events(&config, username)
        .await
        .with_context(|| format!("Could not fetch activity for '{}'", username))?
    {
        FetchOutcome::Found(body) => body,
        FetchOutcome::NotFound => {
            println!("Username not found.");
            return Ok(0);
        }
    };

    match cli.dump_options() {
        Some(options) => handle_dump(&body, &options),
        None => handle_render(&body),
    }
}

// Prints every event, skipping (and warning about) the ones we can't read
fn handle_render(body: &str) -> Result<i32> {
    let results = activity::render_feed(body)?;

    let mut skipped = 0;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(line) => println!("{}", line),
            Err(e) => {
                warn!(index, "skipping event: {}", e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        eprintln!("{} event(s) could not be displayed", skipped);
        Ok(1)
    } else {
        Ok(0)
    }
}

fn handle_dump(body: &str, options: &dump::DumpOptions) -> Result<i32> {
    let records = activity::parse_feed(body)?;
    dump::write_dump(&records, options)?;

    println!(
        "Wrote {} events to {}",
        records.len(),
        options.path.display()
    );
    Ok(0)
}
