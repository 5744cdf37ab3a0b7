//! The callback interface builtins use to reach the host evaluator

use super::error::InterpResult;
use super::parse;
use super::value::Token;

/// Host evaluator as seen from a builtin.
///
/// Builtins receive their arguments unevaluated and call [`Evaluator::exec`]
/// for each one they need, in order. Whatever `exec` returns as an error is
/// passed back to the caller untouched.
pub trait Evaluator {
    /// Unevaluated expression node of the host language
    type Expr;

    /// Reduce one expression to a value
    fn exec(&mut self, expr: &Self::Expr) -> InterpResult<Token>;

    /// Parse the longest integer prefix of `text`.
    /// Returns the value and the number of bytes consumed; 0 means no parse.
    fn parse_int_prefix(&self, text: &[u8]) -> (i64, usize) {
        parse::int_prefix(text)
    }

    /// Parse the longest float prefix of `text`, same contract as
    /// [`Evaluator::parse_int_prefix`].
    fn parse_float_prefix(&self, text: &[u8]) -> (f64, usize) {
        parse::float_prefix(text)
    }
}
