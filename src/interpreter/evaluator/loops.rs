use crate::{
    ast::{BlockStatement, Expr},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, eval_block, eval_expression, is_truthy},
        value::core::Value,
    },
};

/// Evaluates a `while` loop.
///
/// The condition and body share one *partially enclosed* scope that lives
/// across all iterations, so assignments made inside the loop persist
/// outside it. A `Return` sentinel propagates outward; `Break` stops the
/// loop and yields `Null`. The loop's value is otherwise the last body
/// value, or `Null` when the body never ran.
pub fn eval_while(condition: &Expr, body: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let loop_env = Environment::partially_enclosed(env.clone());

    let mut result = Value::Null;
    let mut current = eval_expression(condition, &loop_env)?;

    while is_truthy(&current) {
        result = eval_block(body, &loop_env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
        if matches!(result, Value::Break) {
            return Ok(Value::Null);
        }

        current = eval_expression(condition, &loop_env)?;
    }

    Ok(result)
}

/// Evaluates a `for` loop.
///
/// Unlike `while`, the loop runs in a fully *enclosed* scope: the init
/// binding and anything assigned in the body stay private to the loop. The
/// init expression runs once, then condition, body and increment cycle with
/// the same sentinel handling as `while`.
pub fn eval_for(init: &Expr,
                condition: &Expr,
                increment: &Expr,
                body: &BlockStatement,
                env: &Env)
                -> EvalResult<Value> {
    let loop_env = Environment::enclosed(env.clone());

    eval_expression(init, &loop_env)?;

    let mut result = Value::Null;
    let mut current = eval_expression(condition, &loop_env)?;

    while is_truthy(&current) {
        result = eval_block(body, &loop_env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
        if matches!(result, Value::Break) {
            return Ok(Value::Null);
        }

        eval_expression(increment, &loop_env)?;
        current = eval_expression(condition, &loop_env)?;
    }

    Ok(result)
}
