use std::{
    collections::{HashMap, hash_map::Entry},
    f64::consts::{E, PI},
    sync::{Arc, LazyLock},
};

use crate::{
    engine::operation::{Operation, add, divide, multiply, negate, subtract},
    error::RegistryError,
};

/// The standard calculator vocabulary.
///
/// Symbols are case-sensitive. Each symbol appears exactly once.
pub const STANDARD_OPERATIONS: &[(&str, Operation)] = &[("π", Operation::Constant(PI)),
                                                        ("e", Operation::Constant(E)),
                                                        ("√", Operation::UnaryOp(f64::sqrt)),
                                                        ("cos", Operation::UnaryOp(f64::cos)),
                                                        ("±", Operation::UnaryOp(negate)),
                                                        ("+", Operation::BinaryOp(add)),
                                                        ("-", Operation::BinaryOp(subtract)),
                                                        ("×", Operation::BinaryOp(multiply)),
                                                        ("÷", Operation::BinaryOp(divide)),
                                                        ("=", Operation::Equals)];

static STANDARD: LazyLock<Arc<Registry>> = LazyLock::new(|| {
    let operations = STANDARD_OPERATIONS.iter()
                                        .map(|(symbol, op)| ((*symbol).to_owned(), *op))
                                        .collect();
    Arc::new(Registry { operations })
});

/// Maps operation symbols to the [`Operation`] they perform.
///
/// A registry is immutable once built. Every symbol resolves to exactly one
/// operation; [`Registry::from_entries`] rejects tables that would break
/// that.
///
/// ## Usage
///
/// Most callers never build one: [`Registry::standard`] hands out the shared
/// standard table, and [`Engine::new`](crate::engine::Engine::new) uses it.
#[derive(Debug, Clone)]
pub struct Registry {
    operations: HashMap<String, Operation>,
}

impl Registry {
    /// Returns the shared standard registry.
    ///
    /// The table is built on first use and then reused for the rest of the
    /// process.
    ///
    /// # Example
    /// ```
    /// use keycalc::engine::Registry;
    ///
    /// let registry = Registry::standard();
    /// assert!(registry.contains("√"));
    /// assert!(!registry.contains("sqrt"));
    /// ```
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Builds a registry from `(symbol, operation)` pairs.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateSymbol`] if a symbol appears twice,
    /// or [`RegistryError::EmptySymbol`] for an empty symbol.
    ///
    /// # Example
    /// ```
    /// use keycalc::{engine::{Operation, Registry}, error::RegistryError};
    ///
    /// let registry = Registry::from_entries([("τ", Operation::Constant(std::f64::consts::TAU)),
    ///                                        ("=", Operation::Equals)]).unwrap();
    /// assert_eq!(registry.len(), 2);
    ///
    /// let err = Registry::from_entries([("=", Operation::Equals), ("=", Operation::Equals)]);
    /// assert!(matches!(err, Err(RegistryError::DuplicateSymbol { .. })));
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Result<Self, RegistryError>
        where I: IntoIterator<Item = (S, Operation)>,
              S: Into<String>
    {
        let mut operations = HashMap::new();

        for (symbol, op) in entries {
            let symbol = symbol.into();
            if symbol.is_empty() {
                return Err(RegistryError::EmptySymbol);
            }
            match operations.entry(symbol) {
                Entry::Occupied(entry) => {
                    return Err(RegistryError::DuplicateSymbol { symbol: entry.key().clone() });
                },
                Entry::Vacant(entry) => {
                    entry.insert(op);
                },
            }
        }

        Ok(Self { operations })
    }

    /// Resolves a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.operations.get(symbol).copied()
    }

    /// Whether `symbol` resolves to an operation.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns every symbol with its operation, sorted by symbol.
    #[must_use]
    pub fn symbols(&self) -> Vec<(&str, Operation)> {
        let mut symbols: Vec<_> = self.operations
                                      .iter()
                                      .map(|(symbol, op)| (symbol.as_str(), *op))
                                      .collect();
        symbols.sort_unstable_by(|a, b| a.0.cmp(b.0));
        symbols
    }
}
