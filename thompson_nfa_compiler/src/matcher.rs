use crate::nfa::{State, StateId, NFA};
use crate::sparse_set::SparseSet;

/// A matcher that simulates a Thompson NFA against whole inputs.
///
/// The matcher only borrows the NFA. Every call to [`Matcher::is_match`]
/// allocates its own live state sets, so one NFA can back any number of
/// matchers on any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

/// Scratch space for one simulation.
struct Sets {
    /// Literal and match states live before the current character.
    curr: SparseSet,
    /// Literal and match states live after it.
    next: SparseSet,
    /// Split states already expanded during the current step.
    seen: SparseSet,
    stack: Vec<StateId>,
}

impl Sets {
    fn new(nfa: &NFA) -> Sets {
        Sets {
            curr: SparseSet::new(nfa.len()),
            next: SparseSet::new(nfa.len()),
            seen: SparseSet::new(nfa.len()),
            stack: Vec::new(),
        }
    }
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches.
    ///
    /// The live set starts as the epsilon closure of the start state and is
    /// advanced once per character. The input matches iff the match state is
    /// live once every character has been consumed.
    pub fn is_match(&self, input: &str) -> bool {
        let mut sets = Sets::new(self.nfa);
        let Sets { curr, next, seen, stack } = &mut sets;

        self.add_state(self.nfa.start(), curr, seen, stack);
        for ch in input.chars() {
            if curr.is_empty() {
                trace!("no live states left, rejecting early");
                return false;
            }
            self.step(curr, ch, next, seen, stack);
            std::mem::swap(curr, next);
            trace!("after {:?}: {} live states", ch, curr.len());
        }
        curr.contains(self.nfa.match_state())
    }

    /// Add `id` and everything reachable from it through split states to
    /// `set`. Only literal and match states end up in `set`.
    ///
    /// `seen` records the splits already expanded, which keeps epsilon cycles
    /// such as the one `(a*)*` produces from being walked forever.
    fn add_state(
        &self,
        id: StateId,
        set: &mut SparseSet,
        seen: &mut SparseSet,
        stack: &mut Vec<StateId>,
    ) {
        stack.push(id);
        while let Some(id) = stack.pop() {
            match *self.nfa.state(id) {
                State::Split { alt1, alt2 } => {
                    if seen.insert(id) {
                        // alt1 is expanded first.
                        stack.push(alt2);
                        stack.push(alt1);
                    }
                }
                State::Literal { .. } | State::Match => {
                    set.insert(id);
                }
            }
        }
    }

    /// Compute in `next` the states live after consuming `ch` from `curr`.
    fn step(
        &self,
        curr: &SparseSet,
        ch: char,
        next: &mut SparseSet,
        seen: &mut SparseSet,
        stack: &mut Vec<StateId>,
    ) {
        next.clear();
        seen.clear();
        for id in curr.iter() {
            if let State::Literal { ch: expected, next: target } = *self.nfa.state(id) {
                if expected == ch {
                    self.add_state(target, next, seen, stack);
                }
            }
        }
    }
}
