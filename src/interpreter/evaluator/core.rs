use std::{cell::Cell, collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{assign, builtins, function, index, infix, loops, prefix},
        value::{
            core::{FunctionValue, Value},
            hash_key::HashPair,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum nesting depth of the evaluator.
///
/// Evaluation deeper than this fails with a runtime error instead of
/// overflowing the host stack.
pub const MAX_EVAL_DEPTH: usize = 4096;

thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// RAII guard tracking one level of evaluator nesting.
///
/// Created at the top of every expression evaluation; the matching decrement
/// happens on drop, so early returns and error paths unwind the counter
/// correctly.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> EvalResult<Self> {
        EVAL_DEPTH.with(|depth| {
            if depth.get() >= MAX_EVAL_DEPTH {
                return Err(RuntimeError::RecursionLimitExceeded);
            }
            depth.set(depth.get() + 1);
            Ok(Self)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Evaluates a whole program in the given environment.
///
/// Statements run in order. A `return` unwinds here and yields its unwrapped
/// inner value; the result of the program is otherwise the value of its last
/// statement, or `Null` for an empty program. A `break` outside any loop is
/// not intercepted and simply becomes the statement's value.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: Environment the program runs in.
///
/// # Returns
/// The program's result value.
///
/// # Example
/// ```
/// use doge::{
///     interpreter::{
///         environment::Environment,
///         evaluator::core::eval_program,
///         lexer::Lexer,
///         parser::core::Parser,
///         value::core::Value,
///     },
/// };
///
/// let mut parser = Parser::new(Lexer::new("x = 5; x * 2"));
/// let program = parser.parse_program();
/// let env = Environment::root();
///
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(10)));
/// assert_eq!(env.borrow().get("x"), Some(Value::Integer(5)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(inner) = result {
            return Ok(*inner);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Expression(expr) => eval_expression(expr, env),
        Statement::Return(value) => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Break => Ok(Value::Break),
    }
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], sentinels short-circuit *without* being
/// unwrapped, so the surrounding construct (function call, loop) can see and
/// handle them.
pub fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_) | Value::Break) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates an expression in the given environment.
///
/// This is the recursive dispatcher at the heart of the interpreter; every
/// expression form routes through here, guarded against runaway nesting.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    let _depth = DepthGuard::enter()?;

    match expr {
        Expr::Integer(value) => Ok(Value::Integer(*value)),
        Expr::Float(value) => Ok(Value::Float(*value)),
        Expr::Str(value) => Ok(Value::Str(value.clone())),
        Expr::Boolean(value) => Ok(Value::Boolean(*value)),
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Array { elements } => eval_array_literal(elements, env),
        Expr::Hash { pairs } => eval_hash_literal(pairs, env),
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            prefix::eval_prefix(*operator, &right)
        },
        Expr::Infix { operator,
                      left,
                      right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            infix::eval_infix(*operator, &left, &right)
        },
        Expr::Assign { operator,
                       name,
                       value, } => assign::eval_assign(*operator, name, value, env),
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expr::While { condition, body } => loops::eval_while(condition, body, env),
        Expr::For { init,
                    condition,
                    increment,
                    body, } => loops::eval_for(init, condition, increment, body, env),
        Expr::Function { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(), })))
        },
        Expr::Call { function, arguments } => function::eval_call(function, arguments, env),
        Expr::Index { left, index } => index::eval_index(left, index, env),
    }
}

/// Decides the boolean interpretation of a value.
///
/// Only `Null` and `false` are falsy; every other value, including `0`, `""`
/// and empty containers, is truthy.
///
/// # Example
/// ```
/// use doge::interpreter::{evaluator::core::is_truthy, value::core::Value};
///
/// assert!(!is_truthy(&Value::Null));
/// assert!(!is_truthy(&Value::Boolean(false)));
/// assert!(is_truthy(&Value::Integer(0)));
/// assert!(is_truthy(&Value::Str(String::new())));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}

/// Resolves a name: environment chain first, then the builtin table.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = builtins::core::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string(), })
}

/// Evaluates the elements of an array literal, left to right.
fn eval_array_literal(elements: &[Expr], env: &Env) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(Value::from(values))
}

/// Evaluates a hash literal.
///
/// Each key is evaluated and checked for hashability before its value is
/// evaluated; the first failure aborts the literal.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;

        let Some(hash_key) = key.hash_key() else {
            return Err(RuntimeError::UnusableHashKey { type_name: key.type_name(), });
        };

        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(std::cell::RefCell::new(map))))
}

/// Evaluates a conditional expression.
///
/// The condition and the taken branch share one partially enclosed scope, so
/// assignments inside the branch persist outside the conditional.
fn eval_if_expression(condition: &Expr,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Env)
                      -> EvalResult<Value> {
    let branch_env = Environment::partially_enclosed(env.clone());

    let condition = eval_expression(condition, &branch_env)?;

    if is_truthy(&condition) {
        eval_block(consequence, &branch_env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, &branch_env)
    } else {
        Ok(Value::Null)
    }
}
