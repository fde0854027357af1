//! The finalized, immutable NFA representation and its simulator.

mod build;
pub mod eval;

pub use build::build;
pub use eval::NfaEvaluator;

use crate::table::Table;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A compiled nondeterministic finite automaton, ready for repeated simulation.
///
/// States are identified by small integer indices `0..state_count`. Transitions are stored as a
/// per-state adjacency, split by kind (literal character, wildcard, epsilon) for a cheap
/// simulation step; this is the "finalized" form described alongside [`build`]'s growable
/// fragment representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Nfa {
    pub(crate) state_count: usize,
    pub(crate) start: usize,
    pub(crate) accepting: Vec<bool>,
    pub(crate) char_transitions: Vec<HashMap<char, Vec<usize>>>,
    pub(crate) any_transitions: Vec<Vec<usize>>,
    pub(crate) epsilon_transitions: Vec<Vec<usize>>,
}

impl Nfa {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting[state]
    }

    /// Whether this NFA accepts `input` in full (no substring matching, no anchors).
    pub fn accepts(&self, input: &str) -> bool {
        let mut evaluator = NfaEvaluator::new(self);
        for c in input.chars() {
            evaluator.step(c);
        }
        evaluator.is_accepting()
    }

    pub fn evaluator(&self) -> NfaEvaluator<'_> {
        NfaEvaluator::new(self)
    }

    /// States reachable from the start state by any sequence of transitions. Unreachable states
    /// never affect `accepts`, since simulation only ever visits states reachable this way; this
    /// is a debugging aid, not minimization (no states are merged).
    pub fn reachable_states(&self) -> HashSet<usize> {
        let mut seen = HashSet::from([self.start]);
        let mut stack = vec![self.start];
        while let Some(state) = stack.pop() {
            let mut push_new = |target: usize| {
                if seen.insert(target) {
                    stack.push(target);
                }
            };
            for targets in self.char_transitions[state].values() {
                targets.iter().copied().for_each(&mut push_new);
            }
            self.any_transitions[state]
                .iter()
                .copied()
                .for_each(&mut push_new);
            self.epsilon_transitions[state]
                .iter()
                .copied()
                .for_each(&mut push_new);
        }
        seen
    }

    /// Renders a column-aligned transition table for ad-hoc debugging.
    pub fn to_table(&self) -> String {
        let mut table = Table::new();
        table.push_row(vec![
            "state".to_string(),
            "accepting".to_string(),
            "transitions".to_string(),
        ]);
        for state in 0..self.state_count {
            let marker = if state == self.start { "->" } else { "" };
            let accepting = if self.accepting[state] { "*" } else { "" };

            let mut parts = Vec::new();
            let mut char_entries: Vec<_> = self.char_transitions[state].iter().collect();
            char_entries.sort_by_key(|(c, _)| **c);
            for (c, targets) in char_entries {
                parts.push(format!("{c}->{targets:?}"));
            }
            if !self.any_transitions[state].is_empty() {
                parts.push(format!(".->{:?}", self.any_transitions[state]));
            }
            if !self.epsilon_transitions[state].is_empty() {
                parts.push(format!("ε->{:?}", self.epsilon_transitions[state]));
            }

            table.push_row(vec![
                format!("{marker}{state}"),
                accepting.to_string(),
                parts.join(", "),
            ]);
        }
        table.render("  ")
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;

    #[test]
    fn reachable_states_excludes_nothing_for_simple_patterns() {
        let nfa = compile("ab").unwrap();
        assert_eq!(nfa.reachable_states().len(), nfa.state_count());
    }

    #[test]
    fn to_table_mentions_start_state() {
        let nfa = compile("a").unwrap();
        let table = nfa.to_table();
        assert!(table.contains(&format!("->{}", nfa.start())));
    }
}
