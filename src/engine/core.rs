use std::sync::Arc;

use tracing::{debug, trace};

use crate::engine::{operation::Operation, pending::PendingBinaryOperation, registry::Registry};

/// Which half of a binary operation the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No binary operation is pending.
    Idle,
    /// A binary operation has captured its first operand and waits for `=`.
    AwaitingSecondOperand,
}

/// Immediate-execution calculator engine.
///
/// The engine evaluates strictly in entry order. It holds the current value
/// (the accumulator) and at most one pending binary operation. There is no
/// precedence and no chaining: a second binary operator entered before `=`
/// replaces the pending one.
///
/// Nothing here fails. Unknown symbols, operations on an empty accumulator
/// and a premature `=` are no-ops, and arithmetic follows IEEE-754, so
/// `result` may be absent or non-finite.
///
/// ## Usage
///
/// One `Engine` per calculation session, mutated in place. Independent
/// sessions use independent engines; cloning copies the state and shares only
/// the immutable registry.
#[derive(Debug, Clone)]
pub struct Engine {
    accumulator: Option<f64>,
    pending:     Option<PendingBinaryOperation>,
    registry:    Arc<Registry>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an idle engine with no value over the standard registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Registry::standard())
    }

    /// Creates an idle engine with no value over `registry`.
    #[must_use]
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self { accumulator: None,
               pending: None,
               registry }
    }

    /// Replaces the accumulator with `value`.
    ///
    /// The pending operation, if any, is left alone.
    pub fn set_operand(&mut self, value: f64) {
        trace!(value, "set operand");
        self.accumulator = Some(value);
    }

    /// Performs the operation bound to `symbol`.
    ///
    /// - Constants replace the accumulator.
    /// - Unary operations map the accumulator, if there is one.
    /// - Binary operations capture the accumulator as their first operand,
    ///   replacing any pending operation, and clear it. Without an
    ///   accumulator they do nothing and the pending operation survives.
    /// - `=` applies the pending operation to the accumulator when both are
    ///   present.
    ///
    /// Symbols the registry does not know are ignored.
    ///
    /// # Example
    /// ```
    /// use keycalc::engine::Engine;
    ///
    /// let mut engine = Engine::new();
    /// engine.set_operand(3.0);
    /// engine.perform_operation("+");
    /// engine.set_operand(4.0);
    /// engine.perform_operation("=");
    /// assert_eq!(engine.result(), Some(7.0));
    /// ```
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(op) = self.registry.get(symbol) else {
            debug!(symbol, "ignoring unknown operation symbol");
            return;
        };

        trace!(symbol, kind = op.kind(), "perform operation");

        match op {
            Operation::Constant(value) => self.accumulator = Some(value),
            Operation::UnaryOp(function) => {
                if let Some(value) = self.accumulator {
                    self.accumulator = Some(function(value));
                }
            },
            Operation::BinaryOp(function) => {
                if let Some(value) = self.accumulator.take() {
                    if self.pending.is_some() {
                        debug!(symbol, "replacing pending binary operation");
                    }
                    self.pending = Some(PendingBinaryOperation::new(function, value));
                }
            },
            Operation::Equals => self.perform_pending_binary_operation(),
        }
    }

    fn perform_pending_binary_operation(&mut self) {
        if let (Some(pending), Some(second)) = (self.pending, self.accumulator) {
            self.accumulator = Some(pending.perform(second));
            self.pending = None;
        }
    }

    /// The current value, if one has been entered or computed.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.accumulator
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        if self.pending.is_some() {
            EngineState::AwaitingSecondOperand
        } else {
            EngineState::Idle
        }
    }

    /// The first operand captured by the pending binary operation.
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|pending| pending.first_operand())
    }

    /// Whether `symbol` is in this engine's vocabulary.
    #[must_use]
    pub fn is_known(&self, symbol: &str) -> bool {
        self.registry.contains(symbol)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns to the initial state: no value and nothing pending.
    pub fn reset(&mut self) {
        trace!("reset");
        self.accumulator = None;
        self.pending = None;
    }
}
