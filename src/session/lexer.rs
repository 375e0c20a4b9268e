use logos::Logos;

/// A single entered key.
///
/// Keys are what a keypad front end would send: a complete number, an
/// operation symbol, or an all-clear.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Key {
    /// Numeric literal keys, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Operand(f64),
    /// Operation symbols, passed to the engine as written.
    ///
    /// Words such as `cos` or `e` land here too. Words the registry does not
    /// know are still keys; the engine ignores them.
    #[token("π", symbol)]
    #[token("√", symbol)]
    #[token("±", symbol)]
    #[token("×", symbol)]
    #[token("÷", symbol)]
    #[token("+", symbol)]
    #[token("-", symbol)]
    #[token("=", symbol)]
    #[token("*", |_| "×".to_owned())]
    #[token("/", |_| "÷".to_owned())]
    #[token("pi", |_| "π".to_owned())]
    #[token("sqrt", |_| "√".to_owned())]
    #[token("neg", |_| "±".to_owned())]
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", symbol)]
    Operation(String),
    /// `AC`
    #[token("AC")]
    Clear,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice does not parse, which turns into a lexing error.
fn parse_number(lex: &logos::Lexer<Key>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn symbol(lex: &logos::Lexer<Key>) -> String {
    lex.slice().to_owned()
}
