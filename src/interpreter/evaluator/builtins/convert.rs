use crate::{
    error::RuntimeError,
    interpreter::{environment::Env, evaluator::core::EvalResult, value::core::Value},
};

/// `int(x)`: converts a float (truncating) or a base-10 string to an
/// integer.
#[allow(clippy::cast_possible_truncation)]
pub fn int(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    if args.len() != 1 {
        return Err(RuntimeError::InvalidArgument { message: format!("expected 1 argument. got={}",
                                                                    args.len()), });
    }

    match &args[0] {
        Value::Float(r) => Ok(Value::Integer(*r as i64)),
        Value::Str(text) => match text.parse() {
            Ok(value) => Ok(Value::Integer(value)),
            Err(_) => {
                Err(RuntimeError::InvalidArgument { message: "couldn't parse string as integer".to_string(), })
            },
        },
        other => {
            Err(RuntimeError::InvalidArgument { message: format!("argument to int must be string or float. got={}",
                                                                 other.type_name()), })
        },
    }
}

/// `float(x)`: converts an integer or a string to a float.
#[allow(clippy::cast_precision_loss)]
pub fn float(_env: &Env, args: &[Value]) -> EvalResult<Value> {
    if args.len() != 1 {
        return Err(RuntimeError::InvalidArgument { message: format!("expected 1 argument. got={}",
                                                                    args.len()), });
    }

    match &args[0] {
        Value::Integer(n) => Ok(Value::Float(*n as f64)),
        Value::Str(text) => match text.parse() {
            Ok(value) => Ok(Value::Float(value)),
            Err(_) => {
                Err(RuntimeError::InvalidArgument { message: "couldn't parse string as float".to_string(), })
            },
        },
        other => {
            Err(RuntimeError::InvalidArgument { message: format!("argument to float must be string or int. got={}",
                                                                 other.type_name()), })
        },
    }
}
