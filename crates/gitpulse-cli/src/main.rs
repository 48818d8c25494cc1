use std::process;

use anyhow::Result;
use clap::Parser;

use gitpulse_core::{summary_lines, Client};

#[derive(Parser, Debug)]
#[command(
    name = "gitpulse",
    version,
    about = "Summarize a GitHub user's recent public activity"
)]
struct Cli {
    /// GitHub username to fetch activity for
    handle: String,
}

fn main() {
    // Exit 1 on bad arguments (clap's own exit code would be 2); help and
    // version requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let events = Client::new().fetch_events(&cli.handle)?;
    for line in summary_lines(&cli.handle, &events) {
        println!("{line}");
    }
    Ok(())
}
