use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{builtins::core::BUILTIN_TABLE, core::EvalResult},
        value::core::Value,
    },
};

/// `print(...)`: prints the inspect form of every argument, joined by single
/// spaces, followed by a newline. Returns `Null`.
pub fn print(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    if args.is_empty() {
        return Err(RuntimeError::InvalidArgument { message: format!("print needs at least one argument. got={}",
                                                                    args.len()), });
    }

    let line = args.iter()
                   .map(std::string::ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    println!("{line}");

    Ok(Value::Null)
}

/// `help()`: prints the name and documentation line of every builtin.
/// Returns `Null`.
pub fn help(_env: &Env, _args: &[Value]) -> EvalResult<Value> {
    println!("Name\tDocumentation");
    println!("---------------------");

    for builtin in BUILTIN_TABLE {
        println!("{}\t{}", builtin.name, builtin.doc);
    }

    Ok(Value::Null)
}
