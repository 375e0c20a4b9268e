//! # keycalc
//!
//! keycalc is an immediate-execution calculator engine written in Rust.
//! Operands and operation symbols are entered in order, the way they are on
//! a pocket calculator, and the engine keeps a running result. There is no
//! operator precedence: `3 + 4 - 2 =` forgets the `+` and computes `4 - 2`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, session::Session};

/// The calculator engine.
///
/// This module holds the evaluation state machine: the accumulator, the
/// pending binary operation, and the registry that maps symbols such as `√`
/// or `÷` to the operations they perform.
///
/// # Responsibilities
/// - Applies operands and operations strictly in entry order.
/// - Keeps at most one binary operation pending.
/// - Never fails: invalid sequences are no-ops, arithmetic is IEEE-754.
pub mod engine;
/// Provides the error types for the layers around the engine.
///
/// The engine itself has no failure modes. Errors only arise while lexing
/// entered keys or while building a custom registry.
pub mod error;
/// Drives an engine from lines of entered keys.
///
/// # Responsibilities
/// - Lexes a line into operands, operation symbols and clear keys.
/// - Replays keys into one engine and reports the running result.
pub mod session;

/// Evaluates one key sequence on a fresh engine.
///
/// # Errors
/// Returns an error if the input contains text that is not a key.
///
/// # Examples
/// ```
/// use keycalc::evaluate;
///
/// assert_eq!(evaluate("3 + 4 =").unwrap(), Some(7.0));
/// assert_eq!(evaluate("4 √").unwrap(), Some(2.0));
/// assert_eq!(evaluate("+").unwrap(), None);
///
/// assert!(evaluate("3 ? 4").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<f64>, ParseError> {
    Session::new().feed(source)
}
