use crate::expression::{to_postfix, Function, FunctionBuilder, ParseError, Token, TokenKind};
use log::debug;

/// How `,` separates the arguments of two-argument functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CommaMode {
    /// A comma closes the current argument, so `max ( x + 1 , 3 )` compares
    /// `x + 1` with `3`.
    #[default]
    Delimited,
    /// Commas are dropped and arguments are whatever sits on the stack when
    /// the function is applied. `max ( x + 1 , 3 )` then means `max ( x , 4 )`.
    Positional,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub comma_mode: CommaMode,
}

impl ParserConfig {
    pub fn with_comma_mode(mut self, comma_mode: CommaMode) -> Self {
        self.comma_mode = comma_mode;
        self
    }
}

/// Turns whitespace-separated infix text into a [`Function`] of `x`.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classifies every symbol, stopping at the first one that is not
    /// recognized.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        for token in Token::tokenize(input) {
            if token.kind == TokenKind::Invalid {
                return Err(ParseError::Lexical(token.symbol));
            }
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(tokens)
    }

    pub fn to_postfix(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let tokens = self.tokenize(input)?;
        to_postfix(tokens, self.config.comma_mode)
    }

    /// Parses `input`, keeping the reason on failure.
    pub fn try_parse(&self, input: &str) -> Result<Function, ParseError> {
        debug!("Parsing expression: {:?}", input);
        let postfix = self.to_postfix(input)?;
        FunctionBuilder::new().build(&postfix)
    }

    /// Parses `input`, returning `None` for empty or invalid expressions.
    pub fn parse(&self, input: &str) -> Option<Function> {
        match self.try_parse(input) {
            Ok(function) => Some(function),
            Err(err) => {
                debug!("Rejected expression {:?}: {}", input, err);
                None
            }
        }
    }
}
