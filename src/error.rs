/// Key-sequence lexing errors.
///
/// Defines the errors raised while turning a line of entered keys into
/// operands and operation symbols, before anything reaches the engine.
pub mod parse_error;
/// Registry construction errors.
///
/// Raised when a custom operation table would break the one-symbol,
/// one-operation rule.
pub mod registry_error;

pub use parse_error::ParseError;
pub use registry_error::RegistryError;
