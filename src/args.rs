use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kardex")]
#[command(about = "Interactive console for typed records kept in a flat JSON file", long_about = None)]
pub struct Cli {
    /// Backing JSON file, fixed for the whole session
    #[arg(short, long, default_value = "file.json")]
    pub file: PathBuf,
}
