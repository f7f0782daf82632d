use crate::{
    error::EvalError,
    syntax::{Expr, Operator},
};

/// Evaluates the tree bottom-up: both children first, then the operator.
/// `+ - * /` are plain f64 arithmetic; a zero divisor and zero raised to a
/// negative power are rejected before the operation runs.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Binary { lhs, op, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;

            match op {
                Operator::Plus => Ok(lhs + rhs),
                Operator::Minus => Ok(lhs - rhs),
                Operator::Mul => Ok(lhs * rhs),
                Operator::Div => {
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(lhs / rhs)
                }
                Operator::Pow => {
                    if lhs == 0.0 && rhs < 0.0 {
                        return Err(EvalError::InvalidExponent);
                    }
                    Ok(lhs.powf(rhs))
                }
            }
        }
    }
}
