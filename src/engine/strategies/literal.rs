use crate::engine::{Expression, Resolution, Step, Strategy};

pub struct LiteralStrategy;

impl Default for LiteralStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for LiteralStrategy {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn can_handle(&self, expr: &Expression) -> bool {
        matches!(expr, Expression::Literal(_))
    }

    fn resolve<'a>(&self, expr: &'a Expression) -> Step<'a> {
        match expr {
            Expression::Literal(literal) => Step::Done(Resolution::Literal(literal)),
            _ => Step::Done(Resolution::unresolved_not_implemented()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Literal;

    #[test]
    fn test_handles_literals_only() {
        let strategy = LiteralStrategy::new();
        assert!(strategy.can_handle(&Expression::int(128)));
        assert!(!strategy.can_handle(&Expression::unknown_symbol("size")));
    }

    #[test]
    fn test_resolves_string() {
        let expr = Expression::string("SHA-256");
        match LiteralStrategy::new().resolve(&expr) {
            Step::Done(Resolution::Literal(Literal::Str(s))) => assert_eq!(s, "SHA-256"),
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
