use std::{
    fs,
    io::{self, BufRead, Write},
};

use crate::{
    error::{ExecError, ParseError},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
    run_source,
};

/// The interactive shell prompt.
pub const PROMPT: &str = ">>> ";

/// Runs the interactive shell until end of input.
///
/// Prints the banner, then loops: prompt, read one line, parse and evaluate
/// it against a single persistent environment. Parse errors print the error
/// banner with the batch indented beneath it; runtime errors print as
/// `ERROR: <message>`; any other non-null result prints its inspect form.
pub fn start() {
    println!("Doge v{}", env!("CARGO_PKG_VERSION"));

    let env = toplevel_env();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        match run_source(&line, &env) {
            Ok(Value::Null) => {},
            Ok(value) => println!("{value}"),
            Err(ExecError::Parse(errors)) => print_parser_errors(&errors),
            Err(ExecError::Runtime(error)) => println!("ERROR: {error}"),
        }
    }
}

/// Runs a script file.
///
/// An unreadable path prints `Couldn't read file! Aborting` and returns
/// normally. Parse errors are printed but do not stop evaluation of the
/// statements that did parse; a runtime error prints as `ERROR: <message>`.
pub fn run_file(path: &str) {
    let Ok(source) = fs::read_to_string(path) else {
        println!("Couldn't read file! Aborting");
        return;
    };

    let env = toplevel_env();

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        print_parser_errors(parser.errors());
    }

    if let Err(error) = eval_program(&program, &env) {
        println!("ERROR: {error}");
    }
}

/// Prints a batch of parse errors beneath the error banner.
pub fn print_parser_errors(errors: &[ParseError]) {
    println!("Whoops such errors. Wow!!");
    println!("Syntax Errors:");
    for error in errors {
        println!("  {error}");
    }
}

/// Creates the top-level environment with `__name__` bound to
/// `"__main__"`.
fn toplevel_env() -> Env {
    let env = Environment::root();
    env.borrow_mut().set("__name__", Value::from("__main__"));
    env
}
