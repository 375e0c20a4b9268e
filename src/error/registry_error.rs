#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an operation registry.
pub enum RegistryError {
    /// The same symbol was bound to more than one operation.
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: String,
    },
    /// An empty string was used as a symbol.
    EmptySymbol,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSymbol { symbol } => {
                write!(f, "Registry error: Symbol '{symbol}' is defined more than once.")
            },
            Self::EmptySymbol => write!(f, "Registry error: Symbols must not be empty."),
        }
    }
}

impl std::error::Error for RegistryError {}
