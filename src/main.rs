use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kardex::error::Result;
use kardex::interp::Interpreter;
use kardex::registry::Registry;

mod args;
use args::Cli;

const PROMPT: &str = "(kardex) ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut registry = Registry::open(&cli.file)?;
    let mut interp = Interpreter::new(&mut registry);

    // No prompt when input is piped.
    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin().lock();
    let mut lines = stdin.lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let step = interp.execute(&line?)?;
        for out in &step.lines {
            println!("{}", out);
        }
        if step.quit {
            break;
        }
    }
    Ok(())
}
