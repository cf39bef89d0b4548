use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use damonrec::consts::DEFAULT_INPUT;

/// CLI для DAMON record file (damon_recfmt_ver v2)
#[derive(Parser, Debug)]
#[command(name = "damonrec", version, about = "Decode and export DAMON record files")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Общие аргументы ввода/вывода для всех команд.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Input record file
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Export what was decoded before an error (exit status is still 1)
    #[arg(long, default_value_t = false)]
    pub allow_partial: bool,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print snapshots and regions as a table
    Print {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Export the decoded tree as JSON
    ///
    /// Пример:
    ///   damonrec json --input damon.data --output damon.json --pretty
    Json {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Export one CSV row per region (blank line after each snapshot)
    Csv {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print counts and time range (use --json for one JSON object)
    Summary {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }
}
