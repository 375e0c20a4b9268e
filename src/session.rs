/// Replays lexed keys into an engine.
///
/// A session owns one engine for the lifetime of a calculation and feeds it
/// whole lines of keys at a time.
pub mod core;
/// The lexer module turns a line of entered keys into operands and symbols.
///
/// # Responsibilities
/// - Recognizes number literals and the registry's operation symbols.
/// - Maps ASCII spellings (`*`, `/`, `pi`, `sqrt`, `neg`) onto registry
///   symbols.
/// - Reports characters that cannot start any key.
pub mod lexer;

pub use self::{
    core::{Session, tokenize},
    lexer::Key,
};
