//! Conversion between strings and lists of code points

use std::sync::Arc;

use super::Gfac;
use crate::interp::guard::{check_arity, eval_list, eval_string};
use crate::interp::{Evaluator, InterpResult, Kind, RuntimeError, Token};

pub fn tolist<E: Evaluator + 'static>() -> Gfac<E> {
    Arc::new(to_list::<E>)
}

pub fn tostring<E: Evaluator + 'static>() -> Gfac<E> {
    Arc::new(to_string::<E>)
}

/// tolist(s: string) -> list of int
/// One element per Unicode scalar value, in order.
fn to_list<E: Evaluator>(args: &[E::Expr], ev: &mut E) -> InterpResult<Token> {
    check_arity("tolist", args, 1)?;
    let s = eval_string(ev, "tolist", &args[0])?;
    let codes = s.chars().map(|c| Token::Integer(i64::from(u32::from(c)))).collect();
    Ok(Token::List(codes))
}

/// tostring(l: list of int) -> string
/// Every element must be an int naming a Unicode scalar value.
fn to_string<E: Evaluator>(args: &[E::Expr], ev: &mut E) -> InterpResult<Token> {
    check_arity("tostring", args, 1)?;
    let items = eval_list(ev, "tostring", &args[0])?;
    let mut out = String::with_capacity(items.len());
    for item in &items {
        let code = match item {
            Token::Integer(n) => *n,
            other => return Err(RuntimeError::type_error("tostring", Kind::Integer, other.kind())),
        };
        let c = u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                RuntimeError::conversion_error("tostring", &format!("invalid Unicode codepoint {code}"))
            })?;
        out.push(c);
    }
    Ok(Token::String(out))
}
