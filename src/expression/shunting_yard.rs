use crate::expression::{
    Associativity, CommaMode, Operator, Paren, ParseError, StructuralError, Token, TokenKind,
};
use log::trace;

/// Entry on the pending-operator stack. The bottom is always a `Sentinel`, so
/// lookups at the top never need to special-case an empty stack.
#[derive(Debug)]
enum Pending {
    Sentinel,
    Token(Token),
}

impl Pending {
    /// Whether this entry must be emitted before `incoming` is pushed.
    fn yields_to(&self, incoming: Operator) -> bool {
        match self {
            Pending::Token(Token {
                kind: TokenKind::Operator(top),
                ..
            }) => {
                top.precedence() > incoming.precedence()
                    || (top.precedence() == incoming.precedence()
                        && incoming.associativity() == Associativity::Left)
            }
            _ => false,
        }
    }

    fn is_open_paren(&self) -> bool {
        matches!(self, Pending::Token(token) if token.is_open_paren())
    }

    fn is_function(&self) -> bool {
        matches!(self, Pending::Token(token) if token.is_function())
    }
}

/// Reorders infix tokens into postfix using the shunting-yard algorithm.
///
/// Parentheses never reach the output. A function is emitted right after the
/// `)` that closes its argument list, so `sin ( x )` needs no separate call
/// syntax. How commas are treated depends on `comma_mode`.
pub fn to_postfix(tokens: Vec<Token>, comma_mode: CommaMode) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = vec![Pending::Sentinel];

    for token in tokens {
        match token.kind {
            TokenKind::Constant(_) | TokenKind::Variable => output.push(token),

            TokenKind::Function(_) => stack.push(Pending::Token(token)),

            TokenKind::Operator(operator) => {
                while stack.last().is_some_and(|top| top.yields_to(operator)) {
                    pop_to(&mut stack, &mut output);
                }
                stack.push(Pending::Token(token));
            }

            TokenKind::Parenthesis(Paren::Open) => stack.push(Pending::Token(token)),

            TokenKind::Parenthesis(Paren::Close) => close_group(&mut stack, &mut output)?,

            TokenKind::Comma => match comma_mode {
                CommaMode::Delimited => close_argument(&mut stack, &mut output)?,
                CommaMode::Positional => trace!("Dropping positional comma"),
            },

            TokenKind::Invalid => return Err(ParseError::Lexical(token.symbol)),
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Sentinel => break,
            Pending::Token(token) if token.is_open_paren() => {
                return Err(StructuralError::UnmatchedOpen.into())
            }
            Pending::Token(token) => output.push(token),
        }
    }

    trace!(
        "Postfix: {}",
        output
            .iter()
            .map(|token| token.symbol.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}

fn pop_to(stack: &mut Vec<Pending>, output: &mut Vec<Token>) {
    if let Some(Pending::Token(token)) = stack.pop() {
        output.push(token);
    }
}

/// Handles `)`: emits everything down to the matching `(`, drops the `(` and
/// emits the function that owns the group, if any.
fn close_group(stack: &mut Vec<Pending>, output: &mut Vec<Token>) -> Result<(), ParseError> {
    loop {
        match stack.pop() {
            Some(pending) if pending.is_open_paren() => break,
            Some(Pending::Token(token)) => output.push(token),
            Some(Pending::Sentinel) | None => return Err(StructuralError::UnmatchedClose.into()),
        }
    }

    if stack.last().is_some_and(Pending::is_function) {
        pop_to(stack, output);
    }
    Ok(())
}

/// Handles `,`: emits everything belonging to the finished argument, leaving
/// the enclosing `(` in place.
fn close_argument(stack: &mut Vec<Pending>, output: &mut Vec<Token>) -> Result<(), ParseError> {
    loop {
        match stack.last() {
            Some(pending) if pending.is_open_paren() => return Ok(()),
            Some(Pending::Token(_)) => {}
            Some(Pending::Sentinel) | None => return Err(StructuralError::MisplacedComma.into()),
        }
        pop_to(stack, output);
    }
}
