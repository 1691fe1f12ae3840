use crate::expression::{EvaluationError, Operator, ParseError, StructuralError, Token, TokenKind};
use crate::functions::{Builtin, Operation};
use log::trace;
use std::fmt;
use std::sync::Arc;

/// A composed sub-expression that still depends on the free variable.
pub type Closure = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A slot on the reduction stack.
#[derive(Clone)]
pub enum StackValue {
    Constant(f64),
    Variable,
    Closure(Closure),
}

impl fmt::Debug for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackValue::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            StackValue::Variable => f.write_str("Variable"),
            StackValue::Closure(_) => f.write_str("Closure(..)"),
        }
    }
}

impl StackValue {
    fn into_closure(self) -> Closure {
        match self {
            StackValue::Constant(value) => Arc::new(move |_| value),
            StackValue::Variable => Arc::new(|x| x),
            StackValue::Closure(closure) => closure,
        }
    }

    fn apply_unary(self, op: fn(f64) -> f64) -> StackValue {
        match self {
            StackValue::Constant(value) => StackValue::Constant(op(value)),
            StackValue::Variable => StackValue::Closure(Arc::new(move |x| op(x))),
            StackValue::Closure(inner) => StackValue::Closure(Arc::new(move |x| op(inner(x)))),
        }
    }

    /// Combines `left` and `right` with `op`. Two constants fold right away;
    /// anything touching the variable becomes a closure.
    fn apply_binary(left: StackValue, right: StackValue, op: fn(f64, f64) -> f64) -> StackValue {
        let closure: Closure = match (left, right) {
            (StackValue::Constant(a), StackValue::Constant(b)) => {
                return StackValue::Constant(op(a, b))
            }
            (StackValue::Constant(a), StackValue::Variable) => Arc::new(move |x| op(a, x)),
            (StackValue::Variable, StackValue::Constant(b)) => Arc::new(move |x| op(x, b)),
            (StackValue::Variable, StackValue::Variable) => Arc::new(move |x| op(x, x)),
            (left, right) => {
                let (left, right) = (left.into_closure(), right.into_closure());
                Arc::new(move |x| op(left(x), right(x)))
            }
        };
        StackValue::Closure(closure)
    }
}

/// A compiled single-variable function.
///
/// Cloning is cheap and evaluation is pure, so one instance can be sampled
/// from many threads at once.
#[derive(Clone)]
pub struct Function {
    closure: Closure,
}

impl Function {
    pub fn constant(value: f64) -> Self {
        Self {
            closure: Arc::new(move |_| value),
        }
    }

    pub fn identity() -> Self {
        Self {
            closure: Arc::new(|x| x),
        }
    }

    pub fn from_closure(closure: Closure) -> Self {
        Self { closure }
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.closure)(x)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// Reduces a postfix token sequence into a [`Function`].
pub struct FunctionBuilder {
    stack: Vec<StackValue>,
}

impl Default for FunctionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionBuilder {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn build(mut self, postfix: &[Token]) -> Result<Function, ParseError> {
        for token in postfix {
            match token.kind {
                TokenKind::Constant(value) => self.stack.push(StackValue::Constant(value)),
                TokenKind::Variable => self.stack.push(StackValue::Variable),
                TokenKind::Operator(operator) => self.apply_operator(operator, &token.symbol)?,
                TokenKind::Function(function) => self.apply_function(function)?,
                TokenKind::Comma | TokenKind::Parenthesis(_) | TokenKind::Invalid => {
                    return Err(EvaluationError::UnexpectedToken(token.symbol.clone()).into())
                }
            }
            trace!("After '{}': {:?}", token.symbol, self.stack);
        }

        if self.stack.len() != 1 {
            return Err(StructuralError::FinalStackSize(self.stack.len()).into());
        }

        match self.stack.pop() {
            Some(StackValue::Closure(closure)) => Ok(Function::from_closure(closure)),
            // Either a lone literal or a fully folded constant expression.
            Some(StackValue::Constant(value)) => Ok(Function::constant(value)),
            Some(StackValue::Variable) if postfix.len() == 1 => Ok(Function::identity()),
            Some(StackValue::Variable) => Err(StructuralError::DanglingVariable.into()),
            None => Err(StructuralError::FinalStackSize(0).into()),
        }
    }

    fn apply_operator(&mut self, operator: Operator, symbol: &str) -> Result<(), ParseError> {
        // A lone value under `-` is negation: `- x` reads as `0 - x`.
        let (left, right) = if operator == Operator::Subtract && self.stack.len() == 1 {
            (StackValue::Constant(0.0), self.pop_value(symbol)?)
        } else {
            self.pop_pair(symbol)?
        };
        self.stack.push(StackValue::apply_binary(left, right, operator.operation()));
        Ok(())
    }

    fn apply_function(&mut self, function: Builtin) -> Result<(), ParseError> {
        let value = match function.operation() {
            Operation::Unary(op) => self.pop_value(function.name())?.apply_unary(op),
            Operation::Binary(op) => {
                let (left, right) = self.pop_pair(function.name())?;
                StackValue::apply_binary(left, right, op)
            }
        };
        self.stack.push(value);
        Ok(())
    }

    fn pop_value(&mut self, symbol: &str) -> Result<StackValue, ParseError> {
        self.stack.pop().ok_or_else(|| missing_operands(symbol, 1, 0))
    }

    /// Pops `(left, right)`. The right operand was pushed last, so it comes
    /// off the stack first.
    fn pop_pair(&mut self, symbol: &str) -> Result<(StackValue, StackValue), ParseError> {
        let found = self.stack.len();
        match (self.stack.pop(), self.stack.pop()) {
            (Some(right), Some(left)) => Ok((left, right)),
            _ => Err(missing_operands(symbol, 2, found)),
        }
    }
}

fn missing_operands(symbol: &str, needed: usize, found: usize) -> ParseError {
    EvaluationError::MissingOperands {
        symbol: symbol.to_string(),
        needed,
        found,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{to_postfix, CommaMode};
    use std::f64::consts::PI;

    fn build(input: &str) -> Result<Function, ParseError> {
        let tokens = Token::tokenize(input).collect();
        let postfix = to_postfix(tokens, CommaMode::Delimited)?;
        FunctionBuilder::new().build(&postfix)
    }

    #[test]
    fn test_lone_constant_and_variable() {
        let five = build("5").unwrap();
        assert_eq!(five.eval(-3.0), 5.0);
        assert_eq!(five.eval(1e9), 5.0);

        let identity = build("x").unwrap();
        for x in [-2.0, 0.0, 0.5, 1e6] {
            assert_eq!(identity.eval(x), x);
        }
    }

    #[test]
    fn test_constant_folding() {
        let f = build("3 + 4").unwrap();
        assert_eq!(f.eval(0.0), 7.0);
        assert_eq!(f.eval(100.0), 7.0);
    }

    #[test]
    fn test_operand_order_is_preserved() {
        let f = build("x - 1").unwrap();
        assert_eq!(f.eval(5.0), 4.0);
        let f = build("1 - x").unwrap();
        assert_eq!(f.eval(5.0), -4.0);
        let f = build("x / 2").unwrap();
        assert_eq!(f.eval(5.0), 2.5);
        let f = build("2 ^ x").unwrap();
        assert_eq!(f.eval(3.0), 8.0);
    }

    #[test]
    fn test_closures_nest() {
        let f = build("x ^ 2 + 2 * x + 1").unwrap();
        assert_eq!(f.eval(3.0), 16.0);
        let f = build("( x + 1 ) * ( x - 1 )").unwrap();
        assert_eq!(f.eval(4.0), 15.0);
        let f = build("x * x").unwrap();
        assert_eq!(f.eval(-3.0), 9.0);
    }

    #[test]
    fn test_functions() {
        let f = build("sin ( x )").unwrap();
        assert!(f.eval(0.0).abs() < 1e-12);
        assert!((f.eval(PI / 2.0) - 1.0).abs() < 1e-12);

        let f = build("sqrt ( x ^ 2 + 16 )").unwrap();
        assert_eq!(f.eval(3.0), 5.0);

        let f = build("max ( x , 3 )").unwrap();
        assert_eq!(f.eval(1.0), 3.0);
        assert_eq!(f.eval(5.0), 5.0);

        let f = build("min ( 3 , x )").unwrap();
        assert_eq!(f.eval(1.0), 1.0);
    }

    #[test]
    fn test_constant_function_arguments_fold() {
        let f = build("cos ( 0 ) + x").unwrap();
        assert_eq!(f.eval(2.0), 3.0);
        let f = build("max ( 2 , 7 )").unwrap();
        assert_eq!(f.eval(0.0), 7.0);
    }

    #[test]
    fn test_unary_minus() {
        let f = build("- x").unwrap();
        assert_eq!(f.eval(4.0), -4.0);
        let f = build("- 3").unwrap();
        assert_eq!(f.eval(4.0), -3.0);
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(
            build("* x").unwrap_err(),
            ParseError::Evaluation(EvaluationError::MissingOperands {
                symbol: "*".to_string(),
                needed: 2,
                found: 1,
            })
        );
        assert_eq!(
            build("max ( x )").unwrap_err(),
            ParseError::Evaluation(EvaluationError::MissingOperands {
                symbol: "max".to_string(),
                needed: 2,
                found: 1,
            })
        );
        assert!(matches!(build("sin"), Err(ParseError::Evaluation(_))));
    }

    #[test]
    fn test_final_stack_size() {
        assert_eq!(
            build("").unwrap_err(),
            StructuralError::FinalStackSize(0).into()
        );
        assert_eq!(
            build("x 3").unwrap_err(),
            StructuralError::FinalStackSize(2).into()
        );
    }

    #[test]
    fn test_unexpected_token() {
        let postfix = vec![Token::classify("x"), Token::classify("(")];
        assert_eq!(
            FunctionBuilder::new().build(&postfix).unwrap_err(),
            EvaluationError::UnexpectedToken("(".to_string()).into()
        );
    }

    #[test]
    fn test_domain_errors_propagate_as_non_finite() {
        let f = build("1 / x").unwrap();
        assert_eq!(f.eval(0.0), f64::INFINITY);
        let f = build("sqrt ( x )").unwrap();
        assert!(f.eval(-1.0).is_nan());
        let f = build("asin ( x )").unwrap();
        assert!(f.eval(2.0).is_nan());
    }

    #[test]
    fn test_stack_value_debug() {
        assert_eq!(format!("{:?}", StackValue::Constant(1.5)), "Constant(1.5)");
        assert_eq!(format!("{:?}", StackValue::Variable), "Variable");
        assert_eq!(
            format!("{:?}", StackValue::Closure(Arc::new(|x| x))),
            "Closure(..)"
        );
    }
}
