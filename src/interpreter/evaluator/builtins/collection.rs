use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{builtins::core::check_count, core::EvalResult, function::apply_function},
        value::core::Value,
    },
};

/// `len(x)`: the length of a string (in bytes), array, or hash.
#[allow(clippy::cast_possible_wrap)]
pub fn len(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    check_count(args, 1)?;

    match &args[0] {
        Value::Str(text) => Ok(Value::Integer(text.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.borrow().len() as i64)),
        Value::Hash(pairs) => Ok(Value::Integer(pairs.borrow().len() as i64)),
        other => {
            Err(RuntimeError::InvalidArgument { message: format!("argument to `len` not supported, got={}",
                                                                 other.type_name()), })
        },
    }
}

/// `append(arr, x)`: appends in place; every alias of the array observes the
/// new element. Returns `Null`.
pub fn append(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    check_count(args, 2)?;

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `append` must be ARRAY, got {}",
                                                                    args[0].type_name()), });
    };

    elements.borrow_mut().push(args[1].clone());

    Ok(Value::Null)
}

/// `remove(arr, i)`: removes index `i` in place and returns the removed
/// element. The index must be a non-negative integer inside the array.
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
pub fn remove(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    check_count(args, 2)?;

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `remove` must be ARRAY, got {}",
                                                                    args[0].type_name()), });
    };
    let Value::Integer(index) = &args[1] else {
        return Err(RuntimeError::InvalidArgument { message: format!("second argument to `remove` must be INTEGER. got={}",
                                                                    args[1].type_name()), });
    };

    let mut elements = elements.borrow_mut();

    if *index < 0 || *index >= elements.len() as i64 {
        return Err(RuntimeError::InvalidArgument { message: "Index out of bounds!".to_string(), });
    }

    Ok(elements.remove(*index as usize))
}

/// `sum(arr)`: the numeric sum of an array. Integer when every numeric
/// element is an integer, Float as soon as one is a float. Non-numeric
/// elements are ignored.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn sum(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    let elements = numeric_array_arg("sum", args)?;

    let mut total = 0.0;
    let mut saw_float = false;

    for element in &elements {
        match element {
            Value::Integer(n) => total += *n as f64,
            Value::Float(r) => {
                total += r;
                saw_float = true;
            },
            _ => {},
        }
    }

    if saw_float {
        Ok(Value::Float(total))
    } else {
        Ok(Value::Integer(total as i64))
    }
}

/// `min(arr)`: the smallest numeric element of an array.
pub fn min(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    extremum("min", args, |candidate, best| candidate < best)
}

/// `max(arr)`: the largest numeric element of an array.
pub fn max(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    extremum("max", args, |candidate, best| candidate > best)
}

/// Folds the numeric elements of the array argument into an extremum.
///
/// The result follows the same promotion rule as `sum`: Integer when every
/// numeric element is an integer, Float otherwise. An array without a single
/// numeric element is an error.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
fn extremum(name: &str, args: &[Value], wins: fn(f64, f64) -> bool) -> EvalResult<Value> {
    let elements = numeric_array_arg(name, args)?;

    let mut best: Option<f64> = None;
    let mut saw_float = false;

    for element in &elements {
        let candidate = match element {
            Value::Integer(n) => *n as f64,
            Value::Float(r) => {
                saw_float = true;
                *r
            },
            _ => continue,
        };

        if best.is_none_or(|current| wins(candidate, current)) {
            best = Some(candidate);
        }
    }

    let Some(value) = best else {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `{name}` must contain at least one number"), });
    };

    if saw_float {
        Ok(Value::Float(value))
    } else {
        Ok(Value::Integer(value as i64))
    }
}

/// Extracts the single array argument of a numeric aggregate builtin,
/// returning a snapshot of its elements.
fn numeric_array_arg(name: &str, args: &[Value]) -> EvalResult<Vec<Value>> {
    if args.len() != 1 {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `{name}` must be array."), });
    }

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `{name}` must be array. got={}",
                                                                    args[0].type_name()), });
    };

    Ok(elements.borrow().clone())
}

/// `map(arr, fn)`: a new array of `fn(e)` for every element, in order.
/// The callable may be a user function or a builtin; the first error stops
/// the mapping.
pub fn map(env: &Env, args: &[Value]) -> EvalResult<Value> {
    check_count(args, 2)?;

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { message: format!("argument to `map` must be ARRAY, got {}",
                                                                    args[0].type_name()), });
    };

    let callable = &args[1];
    if !matches!(callable, Value::Function(_) | Value::Builtin(_)) {
        return Err(RuntimeError::InvalidArgument { message: format!("second argument to `map` must be FUNCTION, got={}",
                                                                    callable.type_name()), });
    }

    // Snapshot first so the callable can safely touch the source array.
    let elements = elements.borrow().clone();
    let mut results = Vec::with_capacity(elements.len());

    for element in elements {
        results.push(apply_function(callable, &[element], env)?);
    }

    Ok(Value::from(results))
}
