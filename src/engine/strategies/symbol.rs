use crate::engine::{Expression, Resolution, Step, Strategy, UnresolvedSource};

/// Follows a symbol to the expression it was traced to. The front-end does
/// the data-flow work; this only walks the result.
pub struct SymbolStrategy;

impl Default for SymbolStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for SymbolStrategy {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn can_handle(&self, expr: &Expression) -> bool {
        matches!(expr, Expression::Symbol { .. })
    }

    fn resolve<'a>(&self, expr: &'a Expression) -> Step<'a> {
        match expr {
            Expression::Symbol {
                definition: Some(definition),
                ..
            } => Step::Follow(definition),
            _ => Step::Done(Resolution::Unresolved(UnresolvedSource::IdentifierNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_definition() {
        let expr = Expression::symbol("ALG", Expression::string("AES"));
        match SymbolStrategy::new().resolve(&expr) {
            Step::Follow(next) => assert_eq!(next, &Expression::string("AES")),
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn test_untraced_symbol_is_unresolved() {
        let expr = Expression::unknown_symbol("keySize");
        assert!(matches!(
            SymbolStrategy::new().resolve(&expr),
            Step::Done(Resolution::Unresolved(UnresolvedSource::IdentifierNotFound))
        ));
    }
}
