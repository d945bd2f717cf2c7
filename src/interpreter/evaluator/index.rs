use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, eval_expression},
        value::{
            core::Value,
            hash_key::{HashKey, HashPair},
        },
    },
};

/// Evaluates an index expression.
///
/// Arrays index with integers (negative indices count from the end), hashes
/// index with any hashable key (missing keys yield `Null`), strings index
/// bytewise with integers (negative indices count from the end and the
/// result is a one-character string). Every other target type is an error.
pub fn eval_index(left: &Expr, index: &Expr, env: &Env) -> EvalResult<Value> {
    let target = eval_expression(left, env)?;
    let index = eval_expression(index, env)?;

    match (&target, &index) {
        (Value::Array(elements), Value::Integer(i)) => array_index(elements, *i),
        (Value::Hash(pairs), key) => hash_index(pairs, key),
        (Value::Str(text), key) => string_index(text, key),
        _ => Err(RuntimeError::IndexNotSupported { type_name: target.type_name(), }),
    }
}

/// Indexes an array, resolving negative indices against the length.
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
fn array_index(elements: &Rc<RefCell<Vec<Value>>>, index: i64) -> EvalResult<Value> {
    let elements = elements.borrow();
    let length = elements.len() as i64;

    let mut index = index;
    if index < 0 {
        index += length;
    }

    if index < 0 || index >= length {
        return Err(RuntimeError::IndexOutOfBounds);
    }

    Ok(elements[index as usize].clone())
}

/// Indexes a hash. A missing key yields `Null`; an unhashable key is an
/// error.
fn hash_index(pairs: &Rc<RefCell<HashMap<HashKey, HashPair>>>, key: &Value) -> EvalResult<Value> {
    let Some(hash_key) = key.hash_key() else {
        return Err(RuntimeError::UnusableHashKey { type_name: key.type_name(), });
    };

    Ok(pairs.borrow()
            .get(&hash_key)
            .map_or(Value::Null, |pair| pair.value.clone()))
}

/// Indexes a string bytewise, producing a one-character string.
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
fn string_index(text: &str, key: &Value) -> EvalResult<Value> {
    let Value::Integer(index) = key else {
        return Err(RuntimeError::StringIndexNotInteger);
    };

    let length = text.len() as i64;

    let mut index = *index;
    if index < 0 {
        index += length;
    }

    if index < 0 || index >= length {
        return Err(RuntimeError::StringIndexOutOfRange);
    }

    let byte = text.as_bytes()[index as usize];
    Ok(Value::Str((byte as char).to_string()))
}
