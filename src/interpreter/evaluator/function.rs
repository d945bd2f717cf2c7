use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, eval_block, eval_expression},
        value::core::{FunctionValue, Value},
    },
};

/// Evaluates a call expression: the callee first, then every argument left
/// to right, then the application itself.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Env) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply_function(&callee, &args, env)
}

/// Applies a callable value to evaluated arguments.
///
/// User functions run their body in a fresh scope with parameters bound
/// positionally; a `Return` sentinel is unwrapped before the value escapes
/// the call. Builtins are invoked with the *caller's* environment.
///
/// # Parameters
/// - `callee`: The value being called.
/// - `args`: Evaluated arguments.
/// - `env`: The caller's environment, handed through to builtins.
///
/// # Returns
/// The call result, or `not a function: <TYPE>` for non-callable values.
pub fn apply_function(callee: &Value, args: &[Value], env: &Env) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let local = function_env(function, args);
            let result = eval_block(&function.body, &local)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => (builtin.func)(env, args),
        other => Err(RuntimeError::NotAFunction { type_name: other.type_name(), }),
    }
}

/// Builds the environment a function body runs in.
///
/// The frame is a fresh root: the defining environment is deliberately not
/// captured, so free variables in the body do not resolve to definition-site
/// bindings. Parameters bind positionally; surplus arguments are dropped and
/// unmatched parameters stay unbound.
fn function_env(function: &FunctionValue, args: &[Value]) -> Env {
    let env = Environment::root();

    for (parameter, argument) in function.parameters.iter().zip(args) {
        env.borrow_mut().set(parameter, argument.clone());
    }

    env
}

/// Strips a `Return` sentinel, leaving other values untouched.
pub fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
