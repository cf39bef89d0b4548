use anyhow::Result;
use env_logger::{Builder, Env};

mod cli;
mod util;
mod cmd_print;
mod cmd_json;
mod cmd_csv;
mod cmd_summary;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт: info.
    // Пример: RUST_LOG=debug damonrec summary --input damon.data
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Print { io } => cmd_print::exec(io),

        cli::Cmd::Json { io, pretty } => cmd_json::exec(io, pretty),

        cli::Cmd::Csv { io } => cmd_csv::exec(io),

        cli::Cmd::Summary { io, json } => cmd_summary::exec(io, json),
    }
}
