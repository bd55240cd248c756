pub mod callsite;
pub mod detector;
pub mod sources;
pub mod store;
pub mod strategies;
pub mod value;

pub use callsite::{CallSite, CallSiteFile, Expression, Literal, CONSTRUCTOR};
pub use detector::DetectionEngine;
pub use sources::UnresolvedSource;
pub use store::{DetectionStore, Slot, StoredValue};
pub use value::{Action, DetectedValue, OperationMode, RawValue, Size, SizeUnit};

use strategies::{CallStrategy, LiteralStrategy, SymbolStrategy};

pub const DEFAULT_MAX_DEPTH: usize = 50;

/// What an argument expression ultimately is.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Literal(&'a Literal),
    Call(&'a CallSite),
    Unresolved(UnresolvedSource),
}

impl Resolution<'_> {
    pub fn unresolved_not_implemented() -> Self {
        Self::Unresolved(UnresolvedSource::NotImplemented)
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

/// Outcome of one strategy on one expression.
#[derive(Debug)]
pub enum Step<'a> {
    Done(Resolution<'a>),
    Follow(&'a Expression),
}

pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_handle(&self, expr: &Expression) -> bool;
    fn resolve<'a>(&self, expr: &'a Expression) -> Step<'a>;
}

pub struct Resolver {
    strategies: Vec<Box<dyn Strategy>>,
    max_depth: usize,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            strategies: Self::default_strategies(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    fn default_strategies() -> Vec<Box<dyn Strategy>> {
        vec![
            Box::new(LiteralStrategy::new()),
            Box::new(SymbolStrategy::new()),
            Box::new(CallStrategy::new()),
        ]
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Follows symbol definitions until a literal or a call is reached.
    /// Chains longer than the depth bound come back unresolved.
    pub fn resolve<'a>(&self, expr: &'a Expression) -> Resolution<'a> {
        let mut current = expr;
        for _ in 0..self.max_depth {
            match self.try_strategies(current) {
                Step::Done(resolution) => return resolution,
                Step::Follow(next) => current = next,
            }
        }
        Resolution::Unresolved(UnresolvedSource::DepthExceeded)
    }

    fn try_strategies<'a>(&self, expr: &'a Expression) -> Step<'a> {
        if matches!(expr, Expression::Opaque) {
            return Step::Done(Resolution::Unresolved(UnresolvedSource::RuntimeValue));
        }
        for strategy in &self.strategies {
            if strategy.can_handle(expr) {
                return strategy.resolve(expr);
            }
        }
        Step::Done(Resolution::unresolved_not_implemented())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ResolverBuilder {
    strategies: Vec<Box<dyn Strategy>>,
    max_depth: usize,
    include_defaults: bool,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            include_defaults: true,
        }
    }

    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    pub fn build(mut self) -> Resolver {
        if self.include_defaults && self.strategies.is_empty() {
            self.strategies = Resolver::default_strategies();
        }

        Resolver {
            strategies: self.strategies,
            max_depth: self.max_depth,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
