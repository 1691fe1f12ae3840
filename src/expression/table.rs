use crate::expression::Operator;
use crate::functions::Builtin;
use log::trace;
use std::collections::HashMap;
use std::sync::LazyLock;

/// An entry in the symbol table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(Operator),
    Function(Builtin),
}

// Built on first lookup and read-only afterwards, so parses on different
// threads never contend on it.
static SYMBOLS: LazyLock<HashMap<&'static str, Symbol>> = LazyLock::new(|| {
    let mut symbols = HashMap::with_capacity(Operator::ALL.len() + Builtin::ALL.len());
    for operator in Operator::ALL {
        symbols.insert(operator.symbol(), Symbol::Operator(operator));
    }
    for function in Builtin::ALL {
        symbols.insert(function.name(), Symbol::Function(function));
    }
    trace!("Symbol table initialized with {} entries", symbols.len());
    symbols
});

/// Looks up an operator or function symbol.
pub fn lookup(symbol: &str) -> Option<Symbol> {
    SYMBOLS.get(symbol).copied()
}

/// Names of every recognized function, sorted.
pub fn function_names() -> Vec<&'static str> {
    let mut names: Vec<_> = SYMBOLS
        .iter()
        .filter(|(_, symbol)| matches!(symbol, Symbol::Function(_)))
        .map(|(name, _)| *name)
        .collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_operators() {
        assert_eq!(lookup("+"), Some(Symbol::Operator(Operator::Add)));
        assert_eq!(lookup("^"), Some(Symbol::Operator(Operator::Power)));
    }

    #[test]
    fn test_lookup_functions() {
        assert_eq!(lookup("ln"), Some(Symbol::Function(Builtin::Ln)));
        assert_eq!(lookup("log"), Some(Symbol::Function(Builtin::Log)));
        assert_eq!(lookup("max"), Some(Symbol::Function(Builtin::Max)));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("Sin"), None);
        assert_eq!(lookup("sin("), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("x"), None);
    }

    #[test]
    fn test_function_names() {
        let names = function_names();
        assert_eq!(names.len(), 20);
        assert_eq!(names.first(), Some(&"abs"));
        assert!(names.contains(&"cbrt"));
        assert!(!names.contains(&"+"));
    }
}
