//! Native builtins for a Lisp expression evaluator
//!
//! Arity- and type-checked numeric functions, numeric conversions and a
//! string/code-point codec, exposed through a [`Registry`] the host
//! evaluator dispatches into. The host implements [`Evaluator`] so builtins
//! can evaluate their own arguments.

pub mod builtins;
pub mod config;
pub mod interp;

pub use builtins::{Gfac, Registry, lift_binary, lift_unary};
pub use config::{Config, ConfigError, ParsePolicy};
pub use interp::{ErrorKind, Evaluator, InterpResult, Kind, RuntimeError, Token};
