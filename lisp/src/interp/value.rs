//! Runtime values exchanged between the evaluator and builtins

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Absence of a value
    None,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Float(f64),
    /// Sequence of Unicode scalar values
    String(String),
    /// Ordered sequence of values; owns its elements
    List(Vec<Token>),
}

/// Variant tag of a [`Token`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    None,
    Integer,
    Float,
    String,
    List,
}

impl Kind {
    /// Name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Kind::None => "none",
            Kind::Integer => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::List => "list",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    pub fn kind(&self) -> Kind {
        match self {
            Token::None => Kind::None,
            Token::Integer(_) => Kind::Integer,
            Token::Float(_) => Kind::Float,
            Token::String(_) => Kind::String,
            Token::List(_) => Kind::List,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Token::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Float payload only; integers are not promoted
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Token::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Token]> {
        match self {
            Token::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Token::None)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Integer(n)
    }
}

impl From<f64> for Token {
    fn from(x: f64) -> Self {
        Token::Float(x)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::String(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::String(s)
    }
}

impl From<Vec<Token>> for Token {
    fn from(items: Vec<Token>) -> Self {
        Token::List(items)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::None => write!(f, "nil"),
            Token::Integer(n) => write!(f, "{n}"),
            Token::Float(x) => write!(f, "{x}"),
            Token::String(s) => write!(f, "{s:?}"),
            Token::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Token::Integer(42)), "42");
        assert_eq!(format!("{}", Token::Float(2.5)), "2.5");
        assert_eq!(format!("{}", Token::from("hi")), "\"hi\"");
        assert_eq!(format!("{}", Token::None), "nil");
    }

    #[test]
    fn test_nested_list_display() {
        let t = Token::List(vec![
            Token::Integer(1),
            Token::List(vec![Token::Float(0.5), Token::from("x")]),
            Token::List(vec![]),
        ]);
        assert_eq!(t.to_string(), "(1 (0.5 \"x\") ())");
    }

    #[test]
    fn test_kind_matches_payload() {
        assert_eq!(Token::None.kind(), Kind::None);
        assert_eq!(Token::Integer(1).kind(), Kind::Integer);
        assert_eq!(Token::Float(1.0).kind(), Kind::Float);
        assert_eq!(Token::from("a").kind(), Kind::String);
        assert_eq!(Token::List(vec![]).kind(), Kind::List);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Token::Integer(0).kind().name(), "int");
        assert_eq!(Token::Float(0.0).kind().name(), "float");
        assert_eq!(Token::List(vec![]).kind().name(), "list");
        assert_eq!(Kind::String.to_string(), "string");
    }

    #[test]
    fn test_as_float_does_not_promote() {
        assert_eq!(Token::Integer(3).as_float(), None);
        assert_eq!(Token::Float(3.0).as_float(), Some(3.0));
        assert_eq!(Token::Float(3.0).as_int(), None);
    }

    #[test]
    fn test_accessors() {
        let list = Token::from(vec![Token::Integer(7)]);
        assert_eq!(list.as_list(), Some(&[Token::Integer(7)][..]));
        assert_eq!(Token::from("abc").as_str(), Some("abc"));
        assert!(Token::None.is_none());
        assert!(!Token::Integer(0).is_none());
    }

    #[test]
    fn test_token_json_shape() {
        let t = Token::List(vec![Token::Integer(65), Token::None]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"List":[{"Integer":65},"None"]}"#);
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
