use crate::matcher::Matcher;

/// A state ID in the NFA
pub type StateId = usize;

/// A Thompson NFA state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Consumes exactly `ch` and moves to `next`
    Literal {
        ch: char,
        next: StateId,
    },

    /// Epsilon branch to both targets (no input consumed)
    Split {
        alt1: StateId,
        alt2: StateId,
    },

    /// Match state (accepting)
    Match,
}

impl State {
    /// Returns true if leaving this state never consumes input.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, State::Split { .. })
    }
}

/// A compiled Thompson NFA.
///
/// States live in a single arena and refer to each other by index, so the
/// back edges created by `*` and `+` form cycles without any shared
/// ownership. An `NFA` is never mutated after construction, which makes it
/// safe to match against from any number of threads at once.
#[derive(Clone, PartialEq, Eq)]
pub struct NFA {
    states: Vec<State>,
    start: StateId,
    match_state: StateId,
}

impl NFA {
    /// Assemble an NFA from finished states. Only the compiler does this, and
    /// it guarantees every target is in bounds.
    pub(crate) fn new(states: Vec<State>, start: StateId, match_state: StateId) -> NFA {
        debug_assert!(start < states.len());
        debug_assert_eq!(states.get(match_state), Some(&State::Match));
        NFA { states, start, match_state }
    }

    /// The state every match begins in.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The single accepting state.
    pub fn match_state(&self) -> StateId {
        self.match_state
    }

    /// All states, indexed by `StateId`.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look up one state.
    ///
    /// # Panics
    ///
    /// When `id` does not belong to this NFA.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: even the empty pattern compiles to a match state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns true if this NFA accepts the whole of `input`.
    pub fn is_match(&self, input: &str) -> bool {
        Matcher::new(self).is_match(input)
    }
}

impl std::fmt::Debug for NFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "thompson::NFA(")?;
        for (id, state) in self.states.iter().enumerate() {
            let marker = if id == self.start { '^' } else { ' ' };
            write!(f, "{}{:06}: ", marker, id)?;
            match *state {
                State::Literal { ch, next } => writeln!(f, "{:?} => {}", ch, next)?,
                State::Split { alt1, alt2 } => {
                    writeln!(f, "split({}, {})", alt1, alt2)?
                }
                State::Match => writeln!(f, "MATCH")?,
            }
        }
        writeln!(f, ")")
    }
}
