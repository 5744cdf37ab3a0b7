//! Runtime data model and the evaluator-facing ports

mod error;
pub mod guard;
pub mod parse;
mod port;
mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use port::Evaluator;
pub use value::{Kind, Token};
