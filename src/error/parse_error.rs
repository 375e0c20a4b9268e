#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing a key sequence.
pub enum ParseError {
    /// Found text that is neither a number nor an operation symbol.
    UnexpectedToken {
        /// The offending slice of input.
        token:    String,
        /// Byte offset of the token within the fed input.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected key '{token}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
