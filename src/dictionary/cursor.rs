//! Positions inside a compiled word set automaton.
//!
//! A [`Cursor`] is a plain `Copy` value: the address of the current state
//! plus the output accumulated on the way there. Every match thread holds its
//! own cursor, and stepping returns a new cursor instead of mutating one in
//! place, so a transition taken for one thread can never leak into another.

use fst::raw::{CompiledAddr, Output};

/// Current state and accumulated output of a walk through the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) addr: CompiledAddr,
    pub(crate) output: Output,
}

impl Cursor {
    pub(crate) fn new(addr: CompiledAddr, output: Output) -> Self {
        Cursor { addr, output }
    }

    /// Output accumulated so far.
    pub fn output(&self) -> u64 {
        self.output.value()
    }
}

/// Combine two automaton outputs.
///
/// Outputs are non-negative integers combined by addition, which is
/// associative and commutative and agrees with the final output stored on
/// accepting states.
pub fn combine(left: Output, right: Output) -> Output {
    left.cat(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine() {
        let a = Output::new(3);
        let b = Output::new(4);
        assert_eq!(combine(a, b).value(), 7);
        assert_eq!(combine(Output::zero(), a), a);
        assert_eq!(combine(combine(a, b), a), combine(a, combine(b, a)));
    }
}
