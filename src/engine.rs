/// The engine state and its transitions.
///
/// Holds the accumulator and the pending binary operation, and resolves each
/// entered operand or symbol against the registry.
pub mod core;
/// The operation variants a symbol can resolve to.
pub mod operation;
/// The captured first half of a binary operation.
pub mod pending;
/// The symbol to operation lookup table.
///
/// Built once per process for the standard vocabulary and shared read-only
/// by every engine.
pub mod registry;

pub use self::{
    core::{Engine, EngineState},
    operation::Operation,
    pending::PendingBinaryOperation,
    registry::Registry,
};
