pub mod binary;
pub mod unary;

use crate::expression::{lookup, ParseError, Symbol};

/// A named function callable as `name ( arg )` or `name ( a , b )`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Builtin {
    Abs,
    Acos,
    Asin,
    Atan,
    Cbrt,
    Ceil,
    Cos,
    Cosh,
    Exp,
    Floor,
    Log,
    Ln,
    Round,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    Max,
    Min,
}

/// The callable behind a [`Builtin`], split by arity.
#[derive(Debug, Copy, Clone)]
pub enum Operation {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl Operation {
    pub fn arity(&self) -> usize {
        match self {
            Operation::Unary(_) => 1,
            Operation::Binary(_) => 2,
        }
    }
}

impl Builtin {
    pub const ALL: [Builtin; 20] = [
        Builtin::Abs,
        Builtin::Acos,
        Builtin::Asin,
        Builtin::Atan,
        Builtin::Cbrt,
        Builtin::Ceil,
        Builtin::Cos,
        Builtin::Cosh,
        Builtin::Exp,
        Builtin::Floor,
        Builtin::Log,
        Builtin::Ln,
        Builtin::Round,
        Builtin::Sin,
        Builtin::Sinh,
        Builtin::Sqrt,
        Builtin::Tan,
        Builtin::Tanh,
        Builtin::Max,
        Builtin::Min,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Abs => "abs",
            Builtin::Acos => "acos",
            Builtin::Asin => "asin",
            Builtin::Atan => "atan",
            Builtin::Cbrt => "cbrt",
            Builtin::Ceil => "ceil",
            Builtin::Cos => "cos",
            Builtin::Cosh => "cosh",
            Builtin::Exp => "exp",
            Builtin::Floor => "floor",
            Builtin::Log => "log",
            Builtin::Ln => "ln",
            Builtin::Round => "round",
            Builtin::Sin => "sin",
            Builtin::Sinh => "sinh",
            Builtin::Sqrt => "sqrt",
            Builtin::Tan => "tan",
            Builtin::Tanh => "tanh",
            Builtin::Max => "max",
            Builtin::Min => "min",
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Builtin::Abs => Operation::Unary(f64::abs),
            Builtin::Acos => Operation::Unary(f64::acos),
            Builtin::Asin => Operation::Unary(f64::asin),
            Builtin::Atan => Operation::Unary(f64::atan),
            Builtin::Cbrt => Operation::Unary(f64::cbrt),
            Builtin::Ceil => Operation::Unary(f64::ceil),
            Builtin::Cos => Operation::Unary(f64::cos),
            Builtin::Cosh => Operation::Unary(f64::cosh),
            Builtin::Exp => Operation::Unary(f64::exp),
            Builtin::Floor => Operation::Unary(f64::floor),
            Builtin::Log => Operation::Unary(f64::log10),
            Builtin::Ln => Operation::Unary(f64::ln),
            Builtin::Round => Operation::Unary(unary::round_half_up),
            Builtin::Sin => Operation::Unary(f64::sin),
            Builtin::Sinh => Operation::Unary(f64::sinh),
            Builtin::Sqrt => Operation::Unary(f64::sqrt),
            Builtin::Tan => Operation::Unary(f64::tan),
            Builtin::Tanh => Operation::Unary(f64::tanh),
            Builtin::Max => Operation::Binary(binary::max),
            Builtin::Min => Operation::Binary(binary::min),
        }
    }

    pub fn arity(&self) -> usize {
        self.operation().arity()
    }
}

impl TryFrom<&str> for Builtin {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match lookup(value) {
            Some(Symbol::Function(function)) => Ok(function),
            _ => Err(ParseError::Lexical(value.to_string())),
        }
    }
}
