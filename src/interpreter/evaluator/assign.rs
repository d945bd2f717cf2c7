use crate::{
    ast::{AssignOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, eval_expression},
        value::core::Value,
    },
};

/// Evaluates an assignment expression.
///
/// Plain `=` binds unconditionally into the nearest writable frame (partial
/// frames forward the write outward). Compound operators require an existing
/// binding of the same type: integers and floats support all four, strings
/// support `+=` only. The assignment itself evaluates to `Null`.
///
/// # Parameters
/// - `operator`: The assignment operator.
/// - `name`: The target name.
/// - `value`: The right-hand expression.
/// - `env`: Environment the assignment runs in.
///
/// # Returns
/// `Value::Null`, or the error that stopped the assignment.
pub fn eval_assign(operator: AssignOperator,
                   name: &str,
                   value: &Expr,
                   env: &Env)
                   -> EvalResult<Value> {
    let right = eval_expression(value, env)?;

    if operator == AssignOperator::Assign {
        env.borrow_mut().set(name, right);
        return Ok(Value::Null);
    }

    let current = env.borrow()
                     .get(name)
                     .ok_or(RuntimeError::UninitializedAssignment)?;

    if current.type_name() != right.type_name() {
        return Err(RuntimeError::CompoundTypeMismatch { operator,
                                                        left: current.type_name(),
                                                        right: right.type_name() });
    }

    let result = match (&current, &right) {
        (Value::Integer(l), Value::Integer(r)) => integer_compound(operator, *l, *r)?,
        (Value::Float(l), Value::Float(r)) => float_compound(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => {
            if operator != AssignOperator::AddAssign {
                return Err(RuntimeError::UnknownAssignOperator { operator });
            }
            Value::Str(format!("{l}{r}"))
        },
        _ => {
            return Err(RuntimeError::CompoundTypeMismatch { operator,
                                                            left: current.type_name(),
                                                            right: right.type_name() });
        },
    };

    env.borrow_mut().set(name, result);
    Ok(Value::Null)
}

/// Applies a compound operator to two integers.
fn integer_compound(operator: AssignOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        AssignOperator::AddAssign => left.wrapping_add(right),
        AssignOperator::SubAssign => left.wrapping_sub(right),
        AssignOperator::MulAssign => left.wrapping_mul(right),
        AssignOperator::DivAssign => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.wrapping_div(right)
        },
        AssignOperator::Assign => unreachable!(),
    };

    Ok(Value::Integer(value))
}

/// Applies a compound operator to two floats.
fn float_compound(operator: AssignOperator, left: f64, right: f64) -> Value {
    let value = match operator {
        AssignOperator::AddAssign => left + right,
        AssignOperator::SubAssign => left - right,
        AssignOperator::MulAssign => left * right,
        AssignOperator::DivAssign => left / right,
        AssignOperator::Assign => unreachable!(),
    };

    Value::Float(value)
}
