/*!
This crate provides a small regular expression engine that compiles patterns
to Thompson NFAs and decides whether a whole string is accepted.

The supported syntax is deliberately tiny:

* Any character other than `|`, `*`, `+`, `?`, `(` and `)` matches itself.
  That includes `.`, which is not a wildcard here.
* `xy` matches `x` followed by `y`.
* `x|y` matches `x` or `y`. Alternation binds loosest.
* `x*`, `x+` and `x?` match zero or more, one or more, or zero or one `x`.
  Quantifiers bind tightest.
* `(x)` groups `x`. Groups do not capture.

There are no character classes, anchors, counted repetitions or escapes.
Matching is always against the entire haystack: `ab` does not match `xaby`.

# Example

```
use thompson_regex::Regex;

let re = Regex::new("(ab)+c?")?;
assert!(re.is_match("abab"));
assert!(re.is_match("ababc"));
assert!(!re.is_match("aba"));
# Ok::<(), thompson_regex::Error>(())
```

A compiled [`Regex`] is immutable and cheap to clone, and it may be shared
between threads.

# Crate features

* **std** - Enabled by default. Currently required.
* **logging** - Emits `debug` and `trace` messages through the `log` crate,
  including the postfix form of every compiled pattern.
*/

#![deny(missing_docs)]

use std::sync::Arc;

pub use thompson_nfa_compiler::{
    CompileError as Error, StructuralError, SyntaxError, SyntaxErrorKind,
};

use thompson_nfa_compiler::{Compiler, Config, NFA};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// A compiled regular expression.
///
/// Cloning a `Regex` shares the underlying NFA instead of copying it.
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    nfa: Arc<NFA>,
}

impl Regex {
    /// Compile a regular expression with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the pattern is not valid syntax, e.g. `(a` or
    /// `a|`, or when its NFA would exceed the default size limit.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        RegexBuilder::new(pattern).build()
    }

    /// Returns true if and only if the whole of `haystack` matches.
    ///
    /// # Example
    ///
    /// ```
    /// use thompson_regex::Regex;
    ///
    /// let re = Regex::new("a|b*").unwrap();
    /// assert!(re.is_match(""));
    /// assert!(re.is_match("bbb"));
    /// assert!(!re.is_match("ab"));
    /// ```
    pub fn is_match(&self, haystack: &str) -> bool {
        self.nfa.is_match(haystack)
    }

    /// Returns the pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled NFA.
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

/// A configurable builder for a [`Regex`].
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    config: Config,
}

impl RegexBuilder {
    /// Create a new builder for `pattern` with the default configuration.
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder { pattern: pattern.to_string(), config: Config::new() }
    }

    /// Compile the pattern.
    pub fn build(&self) -> Result<Regex, Error> {
        let mut compiler = Compiler::new();
        compiler.configure(self.config);
        let nfa = compiler.compile(&self.pattern)?;
        Ok(Regex { pattern: Arc::from(self.pattern.as_str()), nfa: Arc::new(nfa) })
    }

    /// Set the maximum depth of nested groups.
    ///
    /// Groups are compiled recursively, so this guards against stack
    /// exhaustion on untrusted patterns. The default is 250.
    ///
    /// # Example
    ///
    /// ```
    /// use thompson_regex::RegexBuilder;
    ///
    /// assert!(RegexBuilder::new("((a))").nest_limit(2).build().is_ok());
    /// assert!(RegexBuilder::new("((a))").nest_limit(1).build().is_err());
    /// ```
    pub fn nest_limit(&mut self, limit: u32) -> &mut RegexBuilder {
        self.config = self.config.nest_limit(limit);
        self
    }

    /// Set the maximum number of NFA states a compiled pattern may use.
    ///
    /// Every literal and every operator adds one state, plus one match
    /// state. The default is `1 << 20`.
    pub fn size_limit(&mut self, limit: usize) -> &mut RegexBuilder {
        self.config = self.config.size_limit(Some(limit));
        self
    }
}

/// Compile `pattern` and report whether it accepts the whole of `haystack`.
///
/// This is a shortcut for `Regex::new(pattern)?.is_match(haystack)`.
///
/// ```
/// assert_eq!(thompson_regex::is_match("a?b", "ab"), Ok(true));
/// assert!(thompson_regex::is_match("(a", "a").is_err());
/// ```
pub fn is_match(pattern: &str, haystack: &str) -> Result<bool, Error> {
    thompson_nfa_compiler::is_match(pattern, haystack)
}
