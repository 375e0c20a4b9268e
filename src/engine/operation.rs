/// Signature of a single-operand operation such as `√`.
pub type UnaryFn = fn(f64) -> f64;
/// Signature of a two-operand operation such as `+`.
pub type BinaryFn = fn(f64, f64) -> f64;

/// What a registry symbol does when it is performed.
///
/// Constants replace the accumulator, unary operations transform it, binary
/// operations capture it as a first operand, and `Equals` resolves whatever
/// binary operation is pending.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value.
    Constant(f64),
    /// Maps the accumulator through a function of one operand.
    UnaryOp(UnaryFn),
    /// Starts a binary operation using the accumulator as its first operand.
    BinaryOp(BinaryFn),
    /// Resolves the pending binary operation.
    Equals,
}

impl Operation {
    /// Returns a short name of the variant, used in logs and listings.
    ///
    /// # Example
    /// ```
    /// use keycalc::engine::Operation;
    ///
    /// assert_eq!(Operation::Constant(1.0).kind(), "constant");
    /// assert_eq!(Operation::Equals.kind(), "equals");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::UnaryOp(_) => "unary",
            Self::BinaryOp(_) => "binary",
            Self::Equals => "equals",
        }
    }
}

pub(crate) fn negate(x: f64) -> f64 {
    -x
}

pub(crate) fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub(crate) fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub(crate) fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub(crate) fn divide(a: f64, b: f64) -> f64 {
    a / b
}
