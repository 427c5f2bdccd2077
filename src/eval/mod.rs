//! Arithmetic expression evaluation.
//!
//! Expressions are restricted to numeric literals and the four binary
//! operators `+ - * /`, with optional sign prefixes on operands. The
//! pipeline is:
//!
//! 1. [`tokenize`]: split the input into numbers and operators
//! 2. [`parse`]: build a flat [`Expr`] tree honoring precedence
//! 3. [`Expr::eval`]: compute the value with `f64` semantics
//!
//! Nothing here executes arbitrary code; any input outside the grammar is an
//! [`EvalError`].

mod error;
mod format;
mod parse;
mod token;

pub use error::{EvalError, Result};
pub use format::format_value;
pub use parse::{Expr, Link, parse};
pub use token::{Operator, Range, Token, is_operator_char, pos, range, tokenize};

/// Evaluate an arithmetic expression.
///
/// # Errors
///
/// Returns an [`EvalError`] when the input contains characters outside the
/// grammar, is malformed, divides by zero, or produces a non-finite value.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    let expr = parse(&tokens)?;
    let value = expr.eval()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}
