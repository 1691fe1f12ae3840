use crate::expression::{lookup, Associativity, Operator, Symbol};
use crate::functions::Builtin;
use std::f64::consts::{E, PI};

/// The only free variable an expression may reference.
pub const VARIABLE: &str = "x";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Paren {
    Open,
    Close,
}

/// What a symbol was classified as. Data that only makes sense for one kind
/// lives inside that kind's variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    Constant(f64),
    Variable,
    Operator(Operator),
    Function(Builtin),
    Comma,
    Parenthesis(Paren),
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub symbol: String,
    pub kind: TokenKind,
}

impl Token {
    /// Classifies one whitespace-delimited symbol.
    ///
    /// Numbers are tried first (with `e` and `pi` standing in for the
    /// constants), then the variable, punctuation, operators and functions.
    /// Anything else is [`TokenKind::Invalid`].
    pub fn classify(symbol: &str) -> Self {
        let kind = match parse_constant(symbol) {
            Some(value) => TokenKind::Constant(value),
            None => match symbol {
                VARIABLE => TokenKind::Variable,
                "," => TokenKind::Comma,
                "(" => TokenKind::Parenthesis(Paren::Open),
                ")" => TokenKind::Parenthesis(Paren::Close),
                _ => match lookup(symbol) {
                    Some(Symbol::Operator(operator)) => TokenKind::Operator(operator),
                    Some(Symbol::Function(function)) => TokenKind::Function(function),
                    None => TokenKind::Invalid,
                },
            },
        };

        Self {
            symbol: symbol.to_string(),
            kind,
        }
    }

    /// Splits on whitespace only; `2x` stays one (invalid) token.
    pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
        input.split_whitespace().map(Token::classify)
    }

    pub fn precedence(&self) -> Option<u8> {
        match self.kind {
            TokenKind::Operator(operator) => Some(operator.precedence()),
            _ => None,
        }
    }

    pub fn associativity(&self) -> Option<Associativity> {
        match self.kind {
            TokenKind::Operator(operator) => Some(operator.associativity()),
            _ => None,
        }
    }

    pub fn arity(&self) -> Option<usize> {
        match self.kind {
            TokenKind::Operator(_) => Some(2),
            TokenKind::Function(function) => Some(function.arity()),
            _ => None,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Parenthesis(Paren::Open)
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, TokenKind::Function(_))
    }
}

fn parse_constant(symbol: &str) -> Option<f64> {
    match symbol {
        "e" => Some(E),
        "pi" => Some(PI),
        _ => {
            // `f64::from_str` also takes `inf`, `infinity` and `nan` in any
            // case; only `Infinity` and `NaN` are literals here.
            let unsigned = symbol.trim_start_matches(['+', '-']);
            let named = unsigned.starts_with(|c: char| c.is_ascii_alphabetic());
            if named && !matches!(unsigned, "Infinity" | "NaN") {
                return None;
            }
            symbol.parse::<f64>().ok()
        }
    }
}
