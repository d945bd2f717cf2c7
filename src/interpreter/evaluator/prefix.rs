use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// # Parameters
/// - `operator`: The prefix operator.
/// - `right`: The operand value.
///
/// # Returns
/// The computed value, or an error when the operator does not apply to the
/// operand's type.
///
/// # Example
/// ```
/// use doge::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix, value::core::Value},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let inverted = eval_prefix(PrefixOperator::Not, &Value::Boolean(true)).unwrap();
/// assert_eq!(inverted, Value::Boolean(false));
/// ```
pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(eval_not(right)),
        PrefixOperator::Negate => eval_negate(right),
    }
}

/// Inverts the truthiness of a value.
///
/// `true` and every non-boolean, non-null value invert to `false`; `false`
/// and `null` invert to `true`.
fn eval_not(right: &Value) -> Value {
    match right {
        Value::Boolean(true) => Value::Boolean(false),
        Value::Boolean(false) | Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Negates a numeric value.
fn eval_negate(right: &Value) -> EvalResult<Value> {
    match right {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
        Value::Float(r) => Ok(Value::Float(-r)),
        other => Err(RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Negate,
                                                           right:    other.type_name(), }),
    }
}
