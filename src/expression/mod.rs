mod builder;
mod error;
mod parser;
mod shunting_yard;
mod table;
mod token;

pub use builder::*;
pub use error::*;
pub use parser::{CommaMode, Parser, ParserConfig};
pub use shunting_yard::to_postfix;
pub use table::{function_names, lookup, Symbol};
pub use token::{Paren, Token, TokenKind, VARIABLE};

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// The real-valued operation behind the symbol.
    ///
    /// Division by zero and similar domain errors are not trapped here; they
    /// come out as `inf` or `NaN` and are left to whoever samples the result.
    pub fn operation(&self) -> fn(f64, f64) -> f64 {
        match self {
            Operator::Add => |a, b| a + b,
            Operator::Subtract => |a, b| a - b,
            Operator::Multiply => |a, b| a * b,
            Operator::Divide => |a, b| a / b,
            Operator::Power => f64::powf,
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        (self.operation())(left, right)
    }
}

impl TryFrom<&str> for Operator {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match lookup(value) {
            Some(Symbol::Operator(operator)) => Ok(operator),
            _ => Err(ParseError::Lexical(value.to_string())),
        }
    }
}
