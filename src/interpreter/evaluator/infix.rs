use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operator applied to two already-evaluated operands.
///
/// Dispatch follows the operand type matrix, in order: integer×integer,
/// float×float, mixed numeric (promoted to float), string×string. Everything
/// else falls back to identity-based `==`/`!=`/`&&`/`||`, then fails with
/// `type mismatch` for differing types or `unknown operator` for matching
/// ones.
///
/// # Example
/// ```
/// use doge::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix, value::core::Value},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Integer(3)).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// // Cross-type equality is identity, never an error.
/// let eq = eval_infix(InfixOperator::Equal, &Value::Integer(1), &Value::Null).unwrap();
/// assert_eq!(eq, Value::Boolean(false));
/// ```
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_infix(operator, *l, *r),
        (Value::Float(l), Value::Float(r)) => float_infix(operator, *l, *r),
        _ if left.is_numeric() && right.is_numeric() => mixed_infix(operator, left, right),
        (Value::Str(l), Value::Str(r)) => string_infix(operator, l, r),
        _ => match operator {
            InfixOperator::Equal => Ok(Value::Boolean(left == right)),
            InfixOperator::NotEqual => Ok(Value::Boolean(left != right)),
            InfixOperator::And => Ok(Value::Boolean(is_true(left) && is_true(right))),
            InfixOperator::Or => Ok(Value::Boolean(is_true(left) || is_true(right))),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 operator,
                                                 right: right.type_name() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name() }),
        },
    }
}

/// Identity check against the canonical `true`.
const fn is_true(value: &Value) -> bool {
    matches!(value, Value::Boolean(true))
}

/// The integer×integer operator table.
///
/// Every operator applies to integers. Arithmetic wraps on overflow;
/// division and modulo by zero are errors; `**` goes through float `pow` and
/// truncates back; shifts past the word width behave like shifting by the
/// width (`<<` produces 0, `>>` saturates to the sign), and negative shift
/// amounts are errors.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
fn integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_rem(right))
        },
        InfixOperator::Pow => Value::Integer((left as f64).powf(right as f64) as i64),
        InfixOperator::BitAnd => Value::Integer(left & right),
        InfixOperator::BitOr => Value::Integer(left | right),
        InfixOperator::BitXor => Value::Integer(left ^ right),
        InfixOperator::Shl => {
            if right < 0 {
                return Err(RuntimeError::NegativeShift { amount: right });
            }
            if right >= 64 {
                Value::Integer(0)
            } else {
                Value::Integer(left.wrapping_shl(right as u32))
            }
        },
        InfixOperator::Shr => {
            if right < 0 {
                return Err(RuntimeError::NegativeShift { amount: right });
            }
            Value::Integer(left >> right.min(63) as u32)
        },
        InfixOperator::And => Value::Boolean(left > 0 && right > 0),
        InfixOperator::Or => Value::Boolean(left > 0 || right > 0),
        InfixOperator::Less => Value::Boolean(left < right),
        InfixOperator::Greater => Value::Boolean(left > right),
        InfixOperator::LessEqual => Value::Boolean(left <= right),
        InfixOperator::GreaterEqual => Value::Boolean(left >= right),
        InfixOperator::Equal => Value::Boolean(left == right),
        InfixOperator::NotEqual => Value::Boolean(left != right),
    };

    Ok(value)
}

/// The float×float operator table.
///
/// Modulo converts both sides to integers and yields an integer.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::float_cmp)]
fn float_infix(operator: InfixOperator, left: f64, right: f64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Float(left + right),
        InfixOperator::Sub => Value::Float(left - right),
        InfixOperator::Mul => Value::Float(left * right),
        InfixOperator::Div => Value::Float(left / right),
        InfixOperator::Pow => Value::Float(left.powf(right)),
        InfixOperator::Mod => {
            if right as i64 == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer((left as i64).wrapping_rem(right as i64))
        },
        InfixOperator::And => Value::Boolean(left > 0.0 && right > 0.0),
        InfixOperator::Or => Value::Boolean(left > 0.0 || right > 0.0),
        InfixOperator::Less => Value::Boolean(left < right),
        InfixOperator::Greater => Value::Boolean(left > right),
        InfixOperator::LessEqual => Value::Boolean(left <= right),
        InfixOperator::GreaterEqual => Value::Boolean(left >= right),
        InfixOperator::Equal => Value::Boolean(left == right),
        InfixOperator::NotEqual => Value::Boolean(left != right),
        _ => {
            return Err(RuntimeError::UnknownInfixOperator { left: "FLOAT",
                                                            operator,
                                                            right: "FLOAT" });
        },
    };

    Ok(value)
}

/// The mixed numeric operator table: one integer, one float.
///
/// Both operands are promoted to float; results are floats except for
/// modulo, which yields an integer, and the comparisons.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::float_cmp)]
fn mixed_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let l = left.as_f64();
    let r = right.as_f64();

    let value = match operator {
        InfixOperator::Add => Value::Float(l + r),
        InfixOperator::Sub => Value::Float(l - r),
        InfixOperator::Mul => Value::Float(l * r),
        InfixOperator::Div => Value::Float(l / r),
        InfixOperator::Pow => Value::Float(l.powf(r)),
        InfixOperator::Mod => {
            if r as i64 == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer((l as i64).wrapping_rem(r as i64))
        },
        InfixOperator::And => Value::Boolean(l > 0.0 && r > 0.0),
        InfixOperator::Or => Value::Boolean(l > 0.0 || r > 0.0),
        InfixOperator::Less => Value::Boolean(l < r),
        InfixOperator::Greater => Value::Boolean(l > r),
        InfixOperator::LessEqual => Value::Boolean(l <= r),
        InfixOperator::GreaterEqual => Value::Boolean(l >= r),
        InfixOperator::Equal => Value::Boolean(l == r),
        InfixOperator::NotEqual => Value::Boolean(l != r),
        _ => {
            return Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                            operator,
                                                            right: right.type_name() });
        },
    };

    Ok(value)
}

/// The string×string operator table: concatenation and equality.
fn string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        InfixOperator::Equal => Ok(Value::Boolean(left == right)),
        InfixOperator::NotEqual => Ok(Value::Boolean(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING" }),
    }
}
