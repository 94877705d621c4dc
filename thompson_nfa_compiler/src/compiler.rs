use crate::{
    error::{StructuralError, SyntaxError, SyntaxErrorKind},
    nfa::{State, StateId, NFA},
    postfix::{self, Converter, Token},
    CompileError, CompileResult,
};

/// The default maximum number of states in a compiled NFA.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// The configuration used by a [`Compiler`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    nest_limit: u32,
    size_limit: Option<usize>,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config {
            nest_limit: postfix::DEFAULT_NEST_LIMIT,
            size_limit: Some(DEFAULT_SIZE_LIMIT),
        }
    }

    /// Set the maximum depth of nested groups a pattern may use.
    pub fn nest_limit(mut self, limit: u32) -> Config {
        self.nest_limit = limit;
        self
    }

    /// Set the maximum number of states the NFA may have, or `None` for no
    /// limit. Compiling a larger NFA fails with
    /// [`CompileError::TooComplex`].
    pub fn size_limit(mut self, limit: Option<usize>) -> Config {
        self.size_limit = limit;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiler that turns a pattern, or its postfix form, into a Thompson NFA
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    /// Create a new compiler with the default configuration
    pub fn new() -> Self {
        Self { config: Config::new() }
    }

    /// Replace this compiler's configuration.
    pub fn configure(&mut self, config: Config) -> &mut Compiler {
        self.config = config;
        self
    }

    /// Compile an infix pattern.
    pub fn compile(&self, pattern: &str) -> CompileResult<NFA> {
        let tokens = Converter::new()
            .nest_limit(self.config.nest_limit)
            .convert(pattern)?;
        debug!("postfix form of {:?}: {}", pattern, postfix::render(&tokens));
        self.build(&tokens)
    }

    /// Build an NFA from a postfix sequence.
    ///
    /// Sequences produced by [`postfix::to_postfix`] always build. Anything
    /// else is checked: an operator without enough operands is a syntax
    /// error at that token's index, and a sequence that leaves more than one
    /// fragment behind is a structural error.
    pub fn build(&self, tokens: &[Token]) -> CompileResult<NFA> {
        let mut builder = Builder::new(self.config.size_limit);
        if tokens.is_empty() {
            // The empty pattern accepts only the empty string.
            let match_state = builder.add(Scratch::Match)?;
            return builder.freeze(match_state, match_state);
        }

        let mut stack: Vec<Fragment> = Vec::new();
        for (index, &token) in tokens.iter().enumerate() {
            let fragment = match token {
                Token::Literal(ch) => {
                    let id = builder.add(Scratch::Literal { ch, next: None })?;
                    Fragment { start: id, out_states: vec![id] }
                }
                Token::Concat => {
                    let (f1, f2) = pop_pair(&mut stack, token, index)?;
                    builder.connect(&f1.out_states, f2.start)?;
                    Fragment { start: f1.start, out_states: f2.out_states }
                }
                Token::Alternate => {
                    let (f1, f2) = pop_pair(&mut stack, token, index)?;
                    let split = builder.add(Scratch::Split {
                        out: vec![f1.start, f2.start],
                    })?;
                    let mut out_states = f1.out_states;
                    out_states.extend(f2.out_states);
                    Fragment { start: split, out_states }
                }
                Token::Star => {
                    // Enter the loop or skip it; the body loops back.
                    let f = pop_one(&mut stack, token, index)?;
                    let split = builder.split(f.start)?;
                    builder.connect(&f.out_states, split)?;
                    Fragment { start: split, out_states: vec![split] }
                }
                Token::Plus => {
                    // The body runs once before the split can loop or leave.
                    let f = pop_one(&mut stack, token, index)?;
                    let split = builder.split(f.start)?;
                    builder.connect(&f.out_states, split)?;
                    Fragment { start: f.start, out_states: vec![split] }
                }
                Token::Question => {
                    let f = pop_one(&mut stack, token, index)?;
                    let split = builder.split(f.start)?;
                    let mut out_states = vec![split];
                    out_states.extend(f.out_states);
                    Fragment { start: split, out_states }
                }
            };
            stack.push(fragment);
        }

        if stack.len() != 1 {
            return Err(StructuralError::FragmentCount(stack.len()).into());
        }
        let fragment = stack.remove(0);
        let match_state = builder.add(Scratch::Match)?;
        builder.connect(&fragment.out_states, match_state)?;
        builder.freeze(fragment.start, match_state)
    }
}

/// A partially built sub-graph: one entry and the states whose outputs are
/// still unconnected. Only exists while folding a postfix sequence.
#[derive(Debug, Clone)]
struct Fragment {
    start: StateId,
    out_states: Vec<StateId>,
}

/// A state under construction. Outputs are filled in as fragments are
/// connected and are never overwritten once set.
#[derive(Debug, Clone)]
enum Scratch {
    Literal { ch: char, next: Option<StateId> },
    Split { out: Vec<StateId> },
    Match,
}

/// Owns the states of one compilation until they are frozen into an NFA.
#[derive(Debug)]
struct Builder {
    states: Vec<Scratch>,
    size_limit: Option<usize>,
}

impl Builder {
    fn new(size_limit: Option<usize>) -> Builder {
        Builder { states: Vec::new(), size_limit }
    }

    fn add(&mut self, state: Scratch) -> CompileResult<StateId> {
        if let Some(limit) = self.size_limit {
            if self.states.len() >= limit {
                return Err(CompileError::TooComplex { limit });
            }
        }
        let id = self.states.len();
        self.states.push(state);
        Ok(id)
    }

    /// A split whose first edge enters `body` and whose second edge is left
    /// for a later `connect`.
    fn split(&mut self, body: StateId) -> CompileResult<StateId> {
        self.add(Scratch::Split { out: vec![body] })
    }

    /// Give each of `out_states` an edge to `target`.
    ///
    /// Edges are appended: a split keeps the edge it was created with and
    /// gains its second one here. Connecting a state with no free output is
    /// an error rather than a replacement.
    fn connect(&mut self, out_states: &[StateId], target: StateId) -> CompileResult<()> {
        for &id in out_states {
            match &mut self.states[id] {
                Scratch::Literal { next, .. } if next.is_none() => *next = Some(target),
                Scratch::Split { out } if out.len() < 2 => out.push(target),
                _ => return Err(StructuralError::SlotFilled(id).into()),
            }
        }
        Ok(())
    }

    fn freeze(self, start: StateId, match_state: StateId) -> CompileResult<NFA> {
        let mut states = Vec::with_capacity(self.states.len());
        for (id, scratch) in self.states.into_iter().enumerate() {
            let state = match scratch {
                Scratch::Literal { ch, next: Some(next) } => State::Literal { ch, next },
                Scratch::Split { out } if out.len() == 2 => {
                    State::Split { alt1: out[0], alt2: out[1] }
                }
                Scratch::Match => State::Match,
                _ => return Err(StructuralError::Dangling(id).into()),
            };
            states.push(state);
        }
        debug!("compiled NFA with {} states", states.len());
        Ok(NFA::new(states, start, match_state))
    }
}

fn pop_one(stack: &mut Vec<Fragment>, token: Token, index: usize) -> Result<Fragment, SyntaxError> {
    stack.pop().ok_or_else(|| missing_operand(token, index))
}

/// Pop the right operand, then the left one. Returns them left first.
fn pop_pair(
    stack: &mut Vec<Fragment>,
    token: Token,
    index: usize,
) -> Result<(Fragment, Fragment), SyntaxError> {
    let f2 = pop_one(stack, token, index)?;
    let f1 = pop_one(stack, token, index)?;
    Ok((f1, f2))
}

fn missing_operand(token: Token, index: usize) -> SyntaxError {
    SyntaxError::new(SyntaxErrorKind::MissingOperand(token.as_char()), index)
}
