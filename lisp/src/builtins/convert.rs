//! `int` and `float`: coercion between integers, floats and numeric text

use std::sync::Arc;

use super::Gfac;
use crate::config::ParsePolicy;
use crate::interp::guard::check_arity;
use crate::interp::{Evaluator, InterpResult, RuntimeError, Token};

const NUMERIC: &str = "int, float or string";

/// `int` with prefix parsing of strings
pub fn int<E: Evaluator + 'static>() -> Gfac<E> {
    int_with(ParsePolicy::Prefix)
}

/// `float` with prefix parsing of strings
pub fn float<E: Evaluator + 'static>() -> Gfac<E> {
    float_with(ParsePolicy::Prefix)
}

pub fn int_with<E: Evaluator + 'static>(policy: ParsePolicy) -> Gfac<E> {
    Arc::new(move |args: &[E::Expr], ev: &mut E| -> InterpResult<Token> {
        to_int(args, ev, policy)
    })
}

pub fn float_with<E: Evaluator + 'static>(policy: ParsePolicy) -> Gfac<E> {
    Arc::new(move |args: &[E::Expr], ev: &mut E| -> InterpResult<Token> {
        to_float(args, ev, policy)
    })
}

/// int(x) -> int
/// Floats truncate toward zero (saturating; NaN becomes 0).
fn to_int<E: Evaluator>(args: &[E::Expr], ev: &mut E, policy: ParsePolicy) -> InterpResult<Token> {
    check_arity("int", args, 1)?;
    match ev.exec(&args[0])? {
        Token::Integer(n) => Ok(Token::Integer(n)),
        Token::Float(x) => Ok(Token::Integer(x as i64)),
        Token::String(s) => {
            let (n, used) = ev.parse_int_prefix(s.as_bytes());
            check_consumed("int", &s, used, policy)?;
            Ok(Token::Integer(n))
        }
        other => Err(RuntimeError::type_error("int", NUMERIC, other.kind())),
    }
}

/// float(x) -> float
fn to_float<E: Evaluator>(args: &[E::Expr], ev: &mut E, policy: ParsePolicy) -> InterpResult<Token> {
    check_arity("float", args, 1)?;
    match ev.exec(&args[0])? {
        Token::Integer(n) => Ok(Token::Float(n as f64)),
        Token::Float(x) => Ok(Token::Float(x)),
        Token::String(s) => {
            let (x, used) = ev.parse_float_prefix(s.as_bytes());
            check_consumed("float", &s, used, policy)?;
            Ok(Token::Float(x))
        }
        other => Err(RuntimeError::type_error("float", NUMERIC, other.kind())),
    }
}

fn check_consumed(name: &str, text: &str, used: usize, policy: ParsePolicy) -> InterpResult<()> {
    if used == 0 {
        return Err(RuntimeError::conversion_error(
            name,
            &format!("no number at start of {text:?}"),
        ));
    }
    if policy == ParsePolicy::Whole && used != text.len() {
        return Err(RuntimeError::conversion_error(
            name,
            &format!("trailing characters {:?} in {text:?}", text.get(used..).unwrap_or("")),
        ));
    }
    Ok(())
}
