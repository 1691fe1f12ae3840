pub mod expression;
pub mod functions;
pub mod sampling;

use expression::{Function, Parser};

/// Parses a whitespace-separated expression in `x`, e.g. `"sin ( x ) * 2"`.
///
/// Returns `None` for empty or invalid input; use
/// [`Parser::try_parse`] to find out why.
pub fn parse_function(expression: &str) -> Option<Function> {
    Parser::new().parse(expression)
}
