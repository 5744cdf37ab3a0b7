//! Argument validation shared by every builtin.
//!
//! Builtins check arity first, then evaluate arguments one at a time with
//! [`eval_float`], [`eval_string`] or [`eval_list`]. Each helper returns on
//! the first failure, so later arguments are never evaluated.

use super::error::{InterpResult, RuntimeError};
use super::port::Evaluator;
use super::value::{Kind, Token};

/// Fail with `ArityMismatch` unless exactly `expected` arguments were supplied.
pub fn check_arity<X>(name: &str, args: &[X], expected: usize) -> InterpResult<()> {
    if args.len() != expected {
        return Err(RuntimeError::arity_mismatch(name, expected, args.len()));
    }
    Ok(())
}

pub fn eval_float<E: Evaluator>(ev: &mut E, name: &str, expr: &E::Expr) -> InterpResult<f64> {
    match ev.exec(expr)? {
        Token::Float(x) => Ok(x),
        other => Err(RuntimeError::type_error(name, Kind::Float, other.kind())),
    }
}

pub fn eval_string<E: Evaluator>(ev: &mut E, name: &str, expr: &E::Expr) -> InterpResult<String> {
    match ev.exec(expr)? {
        Token::String(s) => Ok(s),
        other => Err(RuntimeError::type_error(name, Kind::String, other.kind())),
    }
}

pub fn eval_list<E: Evaluator>(ev: &mut E, name: &str, expr: &E::Expr) -> InterpResult<Vec<Token>> {
    match ev.exec(expr)? {
        Token::List(items) => Ok(items),
        other => Err(RuntimeError::type_error(name, Kind::List, other.kind())),
    }
}
