//! Conversion of an infix pattern into postfix tokens.
//!
//! The dialect has literals, `|`, the postfix quantifiers `*`, `+` and `?`,
//! and `(...)` grouping. Concatenation is implicit in the pattern and made
//! explicit here, so that `a(bb)+|cd` becomes `abb.+.cd.|` where `.` is the
//! concatenation token. Every other character, `.` included, is a literal.

use crate::error::{SyntaxError, SyntaxErrorKind};

/// The default maximum depth of nested groups.
pub const DEFAULT_NEST_LIMIT: u32 = 250;

/// A single element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// Binary concatenation of the two preceding operands.
    Concat,
    /// Binary alternation of the two preceding operands.
    Alternate,
    /// Zero or more of the preceding operand.
    Star,
    /// One or more of the preceding operand.
    Plus,
    /// Zero or one of the preceding operand.
    Question,
}

impl Token {
    /// The symbol used when rendering this token.
    pub fn as_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Concat => '.',
            Token::Alternate => '|',
            Token::Star => '*',
            Token::Plus => '+',
            Token::Question => '?',
        }
    }

    // Higher binds tighter. Quantifiers share the top level.
    fn precedence(self) -> u8 {
        match self {
            Token::Alternate => 0,
            Token::Concat => 1,
            Token::Star | Token::Plus | Token::Question => 2,
            Token::Literal(_) => u8::MAX,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render a postfix sequence as a string, e.g. `ab.*`.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.as_char()).collect()
}

/// Convert a pattern to postfix using the default configuration.
pub fn to_postfix(pattern: &str) -> Result<Vec<Token>, SyntaxError> {
    Converter::new().convert(pattern)
}

/// An operator-precedence converter from infix patterns to postfix tokens.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    nest_limit: u32,
}

impl Converter {
    /// Create a converter with the default nest limit.
    pub fn new() -> Converter {
        Converter { nest_limit: DEFAULT_NEST_LIMIT }
    }

    /// Set the maximum depth of nested groups.
    ///
    /// Groups are converted recursively, so this bounds the stack used by
    /// conversion. A limit of `0` rejects every group.
    pub fn nest_limit(&mut self, limit: u32) -> &mut Converter {
        self.nest_limit = limit;
        self
    }

    /// Convert `pattern` into postfix tokens.
    ///
    /// An empty pattern yields an empty sequence.
    pub fn convert(&self, pattern: &str) -> Result<Vec<Token>, SyntaxError> {
        let chars: Vec<char> = pattern.chars().collect();
        let (output, consumed) = self.convert_group(&chars, 0, 0)?;
        // The top level only stops early on a ')' that nothing opened.
        if consumed < chars.len() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnmatchedCloseParen,
                consumed,
            ));
        }
        Ok(output)
    }

    /// Convert from `start` up to the first unnested `)` or the end of the
    /// pattern. Returns the group's postfix sequence and the number of
    /// characters consumed, not counting the terminating `)`.
    fn convert_group(
        &self,
        chars: &[char],
        start: usize,
        depth: u32,
    ) -> Result<(Vec<Token>, usize), SyntaxError> {
        let mut output = Vec::new();
        let mut operators: Vec<Token> = Vec::new();
        // True at the start of a group and right after '|'.
        let mut expect_operand = true;
        let mut last_alternate = None;

        let mut i = start;
        while i < chars.len() {
            match chars[i] {
                ')' => break,
                '|' => {
                    if expect_operand {
                        return Err(missing_operand('|', i));
                    }
                    push_operator(&mut output, &mut operators, Token::Alternate);
                    expect_operand = true;
                    last_alternate = Some(i);
                }
                c @ ('*' | '+' | '?') => {
                    if expect_operand {
                        return Err(missing_operand(c, i));
                    }
                    let quantifier = match c {
                        '*' => Token::Star,
                        '+' => Token::Plus,
                        _ => Token::Question,
                    };
                    push_operator(&mut output, &mut operators, quantifier);
                }
                '(' => {
                    if depth >= self.nest_limit {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::NestLimitExceeded(self.nest_limit),
                            i,
                        ));
                    }
                    let (group, consumed) =
                        self.convert_group(chars, i + 1, depth + 1)?;
                    let close = i + 1 + consumed;
                    if close >= chars.len() {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::UnmatchedOpenParen,
                            i,
                        ));
                    }
                    if group.is_empty() {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::EmptyGroup,
                            i,
                        ));
                    }
                    if !expect_operand {
                        push_operator(&mut output, &mut operators, Token::Concat);
                    }
                    output.extend(group);
                    expect_operand = false;
                    i = close;
                }
                c => {
                    if !expect_operand {
                        push_operator(&mut output, &mut operators, Token::Concat);
                    }
                    output.push(Token::Literal(c));
                    expect_operand = false;
                }
            }
            i += 1;
        }

        if expect_operand {
            if let Some(offset) = last_alternate {
                return Err(missing_operand('|', offset));
            }
        }
        while let Some(op) = operators.pop() {
            output.push(op);
        }
        Ok((output, i - start))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_operand(op: char, offset: usize) -> SyntaxError {
    SyntaxError::new(SyntaxErrorKind::MissingOperand(op), offset)
}

/// Move every stacked operator that binds at least as tightly as `op` to the
/// output, then stack `op`.
fn push_operator(output: &mut Vec<Token>, operators: &mut Vec<Token>, op: Token) {
    while let Some(&top) = operators.last() {
        if top.precedence() < op.precedence() {
            break;
        }
        output.push(top);
        operators.pop();
    }
    operators.push(op);
}
