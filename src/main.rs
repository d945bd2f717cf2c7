use clap::Parser;
use doge::repl;

/// doge is a small, dynamically typed scripting language.
///
/// Run with a file path to execute a script; run without arguments to start
/// the interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a doge script. The interactive shell starts when omitted.
    file: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.file {
        Some(path) => repl::run_file(&path),
        None => repl::start(),
    }
}
