use crate::engine::{Expression, Resolution, Step, Strategy};

/// Surfaces a nested call so the detector can try dependent rules on it.
pub struct CallStrategy;

impl Default for CallStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CallStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for CallStrategy {
    fn name(&self) -> &'static str {
        "call"
    }

    fn can_handle(&self, expr: &Expression) -> bool {
        matches!(expr, Expression::Call(_))
    }

    fn resolve<'a>(&self, expr: &'a Expression) -> Step<'a> {
        match expr {
            Expression::Call(call) => Step::Done(Resolution::Call(call)),
            _ => Step::Done(Resolution::unresolved_not_implemented()),
        }
    }
}
