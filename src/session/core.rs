use logos::Logos;
use tracing::debug;

use crate::{engine::Engine, error::ParseError, session::lexer::Key};

/// Result type used by the session layer.
pub type SessionResult<T> = Result<T, ParseError>;

/// Lexes a whole line of keys.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for the first slice that does not
/// start a key.
///
/// # Example
/// ```
/// use keycalc::session::{Key, tokenize};
///
/// let keys = tokenize("2 * pi").unwrap();
/// assert_eq!(keys,
///            vec![Key::Operand(2.0), Key::Operation("×".into()), Key::Operation("π".into())]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> SessionResult<Vec<Key>> {
    let mut keys = Vec::new();
    let mut lexer = Key::lexer(source);

    while let Some(key) = lexer.next() {
        if let Ok(key) = key {
            keys.push(key);
        } else {
            return Err(ParseError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                     position: lexer.span().start, });
        }
    }

    Ok(keys)
}

/// A calculation session: one engine fed line by line.
///
/// ## Usage
///
/// Create one per calculation, call [`Session::feed`] with each line the user
/// enters, and drop it (or [`Session::reset`]) when the calculation ends.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: Engine,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing engine, keeping its state.
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Lexes `source` and replays every key into the engine, in order.
    ///
    /// The line is lexed completely before anything is applied, so a lexing
    /// error leaves the engine exactly as it was.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if `source` contains text that is not a key.
    ///
    /// # Returns
    /// The engine's result after the last key.
    ///
    /// # Example
    /// ```
    /// use keycalc::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.feed("3 +").unwrap(), None);
    /// assert_eq!(session.feed("4 =").unwrap(), Some(7.0));
    /// ```
    pub fn feed(&mut self, source: &str) -> SessionResult<Option<f64>> {
        let keys = tokenize(source)?;
        debug!(keys = keys.len(), "feeding keys");

        for key in &keys {
            self.apply(key);
        }

        Ok(self.engine.result())
    }

    /// Applies a single key to the engine.
    pub fn apply(&mut self, key: &Key) {
        match key {
            Key::Operand(value) => self.engine.set_operand(*value),
            Key::Operation(symbol) => self.engine.perform_operation(symbol),
            Key::Clear => self.engine.reset(),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> Engine {
        self.engine
    }

    /// Ends the current calculation and starts over with the same engine.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
