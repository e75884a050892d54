// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is intentionally small:
//   github-activity <username>
//   github-activity <username> --dump-json[=FILE] [--compact]
//
// The username is optional as far as clap is concerned. When it's missing we
// print a one-line usage message ourselves and exit cleanly, instead of
// letting clap exit with an error.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::dump::{DumpOptions, DEFAULT_DUMP_FILE};
use crate::github::{ClientConfig, DEFAULT_API_URL};

/// Printed when no username is given.
pub const USAGE: &str = "Usage: github-activity <username>";

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    long_about = "github-activity fetches the public event feed of a GitHub user and prints \
                  one line per event: pushes, new branches, pull requests, stars, forks, ..."
)]
pub struct Cli {
    /// GitHub username whose activity to show
    pub username: Option<String>,

    /// Write the fetched events to a JSON file instead of printing them
    ///
    /// Defaults to file.json in the current directory. Pick another file
    /// with --dump-json=FILE; a bare word after the flag is the username
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_DUMP_FILE
    )]
    pub dump_json: Option<PathBuf>,

    /// Write the --dump-json file on a single line instead of pretty-printing
    #[arg(long, requires = "dump_json")]
    pub compact: bool,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The username, if one was given and it isn't just whitespace.
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn client_config(&self) -> Result<ClientConfig, crate::error::ActivityError> {
        ClientConfig::new(&self.api_url, self.timeout.map(Duration::from_secs))
    }

    /// Some(..) when --dump-json was passed.
    pub fn dump_options(&self) -> Option<DumpOptions> {
        self.dump_json.as_ref().map(|path| DumpOptions {
            path: path.clone(),
            pretty: !self.compact,
        })
    }
}
