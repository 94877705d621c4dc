//! Thompson NFA Compiler
//!
//! This library compiles a small regular expression dialect into a Thompson
//! NFA and decides whether an entire input string is accepted by it. The
//! dialect has literal characters, concatenation, alternation (`|`),
//! grouping (`(...)`) and the quantifiers `*`, `+` and `?`.
//!
//! Compilation happens in two stages:
//! - [`postfix`] rewrites the pattern into postfix tokens with explicit
//!   concatenation, e.g. `a(bb)+|cd` becomes `abb.+.cd.|`.
//! - [`Compiler`] folds those tokens into NFA fragments, one small sub-graph
//!   per operator, and freezes the result into an immutable [`NFA`].
//!
//! [`Matcher`] then simulates the NFA breadth first, tracking the set of
//! live states one character at a time.
//!
//! ```
//! use thompson_nfa_compiler::Compiler;
//!
//! let nfa = Compiler::new().compile("(ab)+")?;
//! assert!(nfa.is_match("abab"));
//! assert!(!nfa.is_match("aba"));
//! # Ok::<(), thompson_nfa_compiler::CompileError>(())
//! ```

#[cfg(not(feature = "std"))]
compile_error!("`std` feature is currently required to build this crate");

#[macro_use]
mod macros;

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod nfa;
pub mod postfix;
mod sparse_set;

pub use compiler::{Compiler, Config};
pub use error::{CompileError, StructuralError, SyntaxError, SyntaxErrorKind};
pub use matcher::Matcher;
pub use nfa::{State, StateId, NFA};
pub use postfix::Token;

/// The result of compiling a pattern to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Compile `pattern` and report whether it accepts the whole of `input`.
///
/// To match many inputs against one pattern, compile it once with
/// [`Compiler::compile`] instead.
pub fn is_match(pattern: &str, input: &str) -> CompileResult<bool> {
    Ok(Compiler::new().compile(pattern)?.is_match(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_match() {
        assert_eq!(is_match("a|b", "a"), Ok(true));
        assert_eq!(is_match("a|b", "c"), Ok(false));
        assert_eq!(is_match("", ""), Ok(true));
        assert_eq!(is_match("", "a"), Ok(false));
    }

    #[test]
    fn test_is_match_reports_syntax_errors() {
        match is_match("(a", "a") {
            Err(CompileError::Syntax(err)) => {
                assert_eq!(err.kind(), SyntaxErrorKind::UnmatchedOpenParen)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = is_match("ab|", "").unwrap_err();
        assert_eq!(err.to_string(), "operator '|' at offset 2 is missing an operand");
        let err = CompileError::TooComplex { limit: 10 };
        assert_eq!(err.to_string(), "compiled NFA exceeds size limit of 10 states");
    }
}
