//! Literal-only evaluator for unit tests

use super::error::{InterpResult, RuntimeError};
use super::port::Evaluator;
use super::value::Token;

/// Argument expression: either a value or a failure to report from `exec`
#[derive(Debug, Clone)]
pub enum Arg {
    Lit(Token),
    Fail(RuntimeError),
}

impl From<Token> for Arg {
    fn from(t: Token) -> Self {
        Arg::Lit(t)
    }
}

impl From<RuntimeError> for Arg {
    fn from(e: RuntimeError) -> Self {
        Arg::Fail(e)
    }
}

/// Evaluates [`Arg`]s and counts how many times `exec` ran
#[derive(Debug, Default)]
pub struct Literals {
    execs: usize,
}

impl Literals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execs(&self) -> usize {
        self.execs
    }
}

impl Evaluator for Literals {
    type Expr = Arg;

    fn exec(&mut self, expr: &Arg) -> InterpResult<Token> {
        self.execs += 1;
        match expr {
            Arg::Lit(t) => Ok(t.clone()),
            Arg::Fail(e) => Err(e.clone()),
        }
    }
}

pub fn lit(t: impl Into<Token>) -> Arg {
    Arg::Lit(t.into())
}
