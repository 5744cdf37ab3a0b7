//! Native builtins and the registry the evaluator looks them up in
//!
//! | name | arity | argument | result |
//! |------|-------|----------|--------|
//! | `int` | 1 | int, float or string | int |
//! | `float` | 1 | int, float or string | float |
//! | `tolist` | 1 | string | list of int |
//! | `tostring` | 1 | list of int | string |
//! | `sin` `cos` `tan` `sinh` `cosh` `tanh` `asin` `acos` `atan` `asinh` `acosh` `atanh` `exp` `log` `sqrt` | 1 | float | float |
//! | `pow` | 2 | float, float | float |

pub mod codec;
pub mod convert;
pub mod lift;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{Config, ParsePolicy};
use crate::interp::{Evaluator, InterpResult, RuntimeError, Token};

pub use lift::{lift_binary, lift_unary};

/// A builtin procedure: unevaluated arguments plus the evaluator in, value out.
pub type Gfac<E> =
    Arc<dyn Fn(&[<E as Evaluator>::Expr], &mut E) -> InterpResult<Token> + Send + Sync>;

/// Name → builtin table. Filled during construction, read-only afterwards.
pub struct Registry<E: Evaluator> {
    builtins: HashMap<String, Gfac<E>>,
}

impl<E: Evaluator + 'static> Registry<E> {
    pub fn empty() -> Self {
        Registry {
            builtins: HashMap::new(),
        }
    }

    /// Every builtin, with prefix parsing for `int` and `float`
    pub fn standard() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::empty();
        registry.register_standard(config.conversion);
        registry.builtins.retain(|name, _| !config.excludes(name));
        tracing::debug!(
            count = registry.builtins.len(),
            policy = ?config.conversion,
            excluded = config.exclude.len(),
            "builtin registry built"
        );
        registry
    }

    fn register_standard(&mut self, policy: ParsePolicy) {
        self.builtins.insert("int".to_string(), convert::int_with(policy));
        self.builtins.insert("float".to_string(), convert::float_with(policy));
        self.builtins.insert("tolist".to_string(), codec::tolist());
        self.builtins.insert("tostring".to_string(), codec::tostring());
        for (name, f) in lift::UNARY {
            self.builtins.insert(name.to_string(), lift_unary(name, f));
        }
        for (name, f) in lift::BINARY {
            self.builtins.insert(name.to_string(), lift_binary(name, f));
        }
    }

    /// Add or replace a builtin while setting up the registry
    pub fn with(mut self, name: impl Into<String>, builtin: Gfac<E>) -> Self {
        self.builtins.insert(name.into(), builtin);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Gfac<E>> {
        self.builtins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builtins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }

    /// Invoke the builtin registered under `name`
    pub fn call(&self, name: &str, args: &[E::Expr], ev: &mut E) -> InterpResult<Token> {
        let builtin = self
            .builtins
            .get(name)
            .ok_or_else(|| RuntimeError::undefined_function(name))?;
        tracing::trace!(name, argc = args.len(), "calling builtin");
        builtin(args, ev)
    }
}

impl<E: Evaluator> Clone for Registry<E> {
    fn clone(&self) -> Self {
        Registry {
            builtins: self.builtins.clone(),
        }
    }
}

impl<E: Evaluator> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.builtins.keys().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("builtins", &names).finish()
    }
}
