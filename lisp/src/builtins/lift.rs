//! Lifting plain float functions into builtins

use std::sync::Arc;

use super::Gfac;
use crate::interp::guard::{check_arity, eval_float};
use crate::interp::{Evaluator, InterpResult, Token};

/// Wrap `f: f64 -> f64` as a one-argument builtin taking a Float.
pub fn lift_unary<E, F>(name: &'static str, f: F) -> Gfac<E>
where
    E: Evaluator + 'static,
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    Arc::new(move |args: &[E::Expr], ev: &mut E| -> InterpResult<Token> {
        check_arity(name, args, 1)?;
        let x = eval_float(ev, name, &args[0])?;
        Ok(Token::Float(f(x)))
    })
}

/// Wrap `f: (f64, f64) -> f64` as a two-argument builtin taking Floats.
/// The first argument is checked before the second is evaluated.
pub fn lift_binary<E, F>(name: &'static str, f: F) -> Gfac<E>
where
    E: Evaluator + 'static,
    F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
{
    Arc::new(move |args: &[E::Expr], ev: &mut E| -> InterpResult<Token> {
        check_arity(name, args, 2)?;
        let x = eval_float(ev, name, &args[0])?;
        let y = eval_float(ev, name, &args[1])?;
        Ok(Token::Float(f(x, y)))
    })
}

/// Unary functions registered by default
pub(crate) const UNARY: [(&str, fn(f64) -> f64); 15] = [
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("asinh", f64::asinh),
    ("acosh", f64::acosh),
    ("atanh", f64::atanh),
    ("exp", f64::exp),
    ("log", f64::ln),
    ("sqrt", f64::sqrt),
];

/// Binary functions registered by default
pub(crate) const BINARY: [(&str, fn(f64, f64) -> f64); 1] = [("pow", f64::powf)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::testing::{Literals, lit};
    use crate::interp::{ErrorKind, RuntimeError};

    #[test]
    fn test_unary_table_matches_std() {
        for (name, f) in UNARY {
            let g = lift_unary::<Literals, _>(name, f);
            for x in [0.0, 0.5, -0.25, 1.0, 2.0] {
                let got = g(&[lit(x)], &mut Literals::new()).unwrap();
                let want = f(x);
                match got {
                    Token::Float(y) => assert!(
                        y.to_bits() == want.to_bits() || (y.is_nan() && want.is_nan()),
                        "{name}({x}) = {y}, want {want}"
                    ),
                    other => panic!("{name} returned {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_unary_rejects_integer() {
        let sin = lift_unary::<Literals, _>("sin", f64::sin);
        let err = sin(&[lit(0_i64)], &mut Literals::new()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        assert!(err.message.contains("expected float, got int"));
    }

    #[test]
    fn test_unary_arity_checked_before_eval() {
        let sqrt = lift_unary::<Literals, _>("sqrt", f64::sqrt);
        for args in [vec![], vec![lit(1.0), lit(2.0)]] {
            let mut ev = Literals::new();
            let err = sqrt(&args, &mut ev).unwrap_err();
            assert_eq!(err.kind, ErrorKind::ArityMismatch);
            assert_eq!(ev.execs(), 0);
        }
    }

    #[test]
    fn test_binary_pow() {
        let pow = lift_binary::<Literals, _>("pow", f64::powf);
        let got = pow(&[lit(2.0), lit(10.0)], &mut Literals::new()).unwrap();
        assert_eq!(got, Token::Float(1024.0));
    }

    #[test]
    fn test_binary_first_failure_stops_evaluation() {
        let pow = lift_binary::<Literals, _>("pow", f64::powf);
        let mut ev = Literals::new();
        let err = pow(&[lit(2_i64), lit(3.0)], &mut ev).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        assert_eq!(ev.execs(), 1);

        let mut ev = Literals::new();
        let boom = RuntimeError::undefined_function("boom");
        let err = pow(&[boom.clone().into(), lit(3.0)], &mut ev).unwrap_err();
        assert_eq!(err, boom);
        assert_eq!(ev.execs(), 1);
    }

    #[test]
    fn test_binary_second_argument_checked() {
        let pow = lift_binary::<Literals, _>("pow", f64::powf);
        let mut ev = Literals::new();
        let err = pow(&[lit(2.0), lit("3")], &mut ev).unwrap_err();
        assert!(err.message.contains("got string"));
        assert_eq!(ev.execs(), 2);
    }

    #[test]
    fn test_binary_arity() {
        let pow = lift_binary::<Literals, _>("pow", f64::powf);
        let mut ev = Literals::new();
        let err = pow(&[lit(2.0)], &mut ev).unwrap_err();
        assert_eq!(err.message, "function pow expects 2 argument(s), got 1");
        assert_eq!(ev.execs(), 0);
    }
}
