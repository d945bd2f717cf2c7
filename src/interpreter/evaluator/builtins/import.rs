use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{ExecError, RuntimeError},
    interpreter::{environment::Env, evaluator::core::EvalResult, value::core::Value},
    run_source,
};

/// `import(path, ...)`: loads other source files into the caller's
/// environment.
///
/// Each path resolves as `<path>.doge` against the working directory first,
/// then against the directory named by the `DOGEROOT` environment variable.
/// The file is parsed and evaluated in the *caller's* environment, so its
/// top-level bindings land next to the importer's own. While the imports
/// run, `__name__` is bound to `"__import__"`; it is restored to
/// `"__main__"` when the builtin returns, whether or not it succeeded.
///
/// Parse errors inside an imported file abort the import with the collected
/// errors; the imported program's own runtime result is discarded.
pub fn import(env: &Env, args: &[Value]) -> EvalResult<Value> {
    if args.is_empty() {
        return Err(RuntimeError::InvalidArgument { message: format!("import expected at least 1 argument. got={}",
                                                                    args.len()), });
    }

    env.borrow_mut().set("__name__", Value::from("__import__"));
    let result = import_all(env, args);
    env.borrow_mut().set("__name__", Value::from("__main__"));

    result?;
    Ok(Value::Null)
}

/// Imports every path argument in order, stopping at the first failure.
fn import_all(env: &Env, args: &[Value]) -> EvalResult<()> {
    for arg in args {
        let Value::Str(path) = arg else {
            return Err(RuntimeError::InvalidArgument { message: format!("argument to import must be string. got={}",
                                                                        arg.type_name()), });
        };

        import_one(env, path)?;
    }

    Ok(())
}

/// Resolves, reads and evaluates one imported file.
fn import_one(env: &Env, path: &str) -> EvalResult<()> {
    let file_name = format!("{path}.doge");

    let mut file_path = PathBuf::from(&file_name);
    if !file_path.exists() {
        let root = std::env::var("DOGEROOT").map_err(|_| RuntimeError::ImportNotFound)?;
        file_path = Path::new(&root).join(&file_name);
    }

    let Ok(source) = fs::read_to_string(&file_path) else {
        return Err(RuntimeError::ImportFailed { path: path.to_string(), });
    };

    match run_source(&source, env) {
        Ok(_) => Ok(()),
        Err(ExecError::Parse(errors)) => Err(RuntimeError::ImportParse { path: path.to_string(),
                                                                         errors }),
        // The imported program's runtime result is not the importer's
        // problem; the original discards it the same way.
        Err(ExecError::Runtime(_)) => Ok(()),
    }
}
