use crate::engine::operation::BinaryFn;

/// A binary operation waiting for its second operand.
///
/// The first operand is captured when the operation is created and is never
/// read back from the accumulator afterwards.
#[derive(Debug, Clone, Copy)]
pub struct PendingBinaryOperation {
    function:      BinaryFn,
    first_operand: f64,
}

impl PendingBinaryOperation {
    /// Captures `function` together with its first operand.
    #[must_use]
    pub const fn new(function: BinaryFn, first_operand: f64) -> Self {
        Self { function,
               first_operand }
    }

    /// The operand captured at creation time.
    #[must_use]
    pub const fn first_operand(&self) -> f64 {
        self.first_operand
    }

    /// Applies the captured function to the first operand and
    /// `second_operand`.
    ///
    /// # Example
    /// ```
    /// use keycalc::engine::PendingBinaryOperation;
    ///
    /// let pending = PendingBinaryOperation::new(|a, b| a - b, 10.0);
    /// assert_eq!(pending.perform(4.0), 6.0);
    /// ```
    #[must_use]
    pub fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}
