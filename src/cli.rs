use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "mazecut")]
#[command(about = "Halve the width of an ASCII-art maze file in place")]
#[command(long_about = "mazecut rewrites a maze file in place.

For every line, the final character (normally the newline) is dropped and
every other character of what remains is kept, starting with the first.
A newline is then appended. The original content is not backed up.

EXAMPLES:
  mazecut maze.txt                 Shrink maze.txt in place")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
pub struct Cli {
    /// The file to be edited
    #[arg(value_name = "FILE_NAME")]
    pub file_name: PathBuf,
}

/// Parse the process arguments, exiting with clap's usage error on failure
pub fn parse_args() -> Cli {
    Cli::parse()
}
