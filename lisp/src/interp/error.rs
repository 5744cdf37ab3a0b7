//! Runtime errors raised by builtins

use std::fmt;

use thiserror::Error;

use super::value::Kind;

/// Runtime error returned by a builtin or by the evaluator it calls back into
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Runtime error: {message}")]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of argument expressions
    ArityMismatch,
    /// Evaluated argument has the wrong variant
    TypeError,
    /// Text or code point could not be converted
    ConversionError,
    /// No builtin registered under the requested name
    UndefinedFunction,
}

impl RuntimeError {
    pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> Self {
        RuntimeError {
            kind: ErrorKind::ArityMismatch,
            message: format!("function {name} expects {expected} argument(s), got {got}"),
        }
    }

    pub fn type_error(name: &str, expected: impl fmt::Display, got: Kind) -> Self {
        RuntimeError {
            kind: ErrorKind::TypeError,
            message: format!("type error in {name}: expected {expected}, got {got}"),
        }
    }

    pub fn conversion_error(name: &str, detail: &str) -> Self {
        RuntimeError {
            kind: ErrorKind::ConversionError,
            message: format!("cannot convert in {name}: {detail}"),
        }
    }

    pub fn undefined_function(name: &str) -> Self {
        RuntimeError {
            kind: ErrorKind::UndefinedFunction,
            message: format!("undefined function: {name}"),
        }
    }
}

/// Result type for builtin invocations
pub type InterpResult<T> = Result<T, RuntimeError>;
