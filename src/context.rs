//! The execution context visible to code running inside a scope.

use proofscope_core::{Actor, ModeFlags, ScopeOptions, Witness};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Actor, witnesses, mode flags and access counters for one scope.
///
/// A fresh context is built on every scope entry. While the scope is live the
/// only mutation is the accessor bumping `actual_accesses`; once the scope
/// exits the caller receives the final state as an owned value.
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    witnesses: Option<Vec<Witness>>,
    actor: Option<Weak<dyn Actor>>,
    expected_accesses: Option<usize>,
    actual_accesses: Cell<usize>,
    modes: ModeFlags,
}

impl ExecutionContext {
    /// Build from caller options. Any caller-supplied `actual_accesses` is
    /// dropped; the counter always starts at 0.
    pub(crate) fn from_options(options: ScopeOptions, default_expected: Option<usize>) -> Self {
        Self {
            witnesses: options.witnesses,
            actor: options.actor,
            expected_accesses: options.expected_accesses.or(default_expected),
            actual_accesses: Cell::new(0),
            modes: options.modes,
        }
    }

    /// Count one accessor read and return the new total.
    pub(crate) fn record_access(&self) -> usize {
        let count = self.actual_accesses.get() + 1;
        self.actual_accesses.set(count);
        count
    }

    pub fn witnesses(&self) -> Option<&[Witness]> {
        self.witnesses.as_deref()
    }

    /// The actor, if one was supplied and is still alive.
    pub fn actor(&self) -> Option<Rc<dyn Actor>> {
        self.actor.as_ref().and_then(Weak::upgrade)
    }

    pub fn expected_accesses(&self) -> Option<usize> {
        self.expected_accesses
    }

    pub fn actual_accesses(&self) -> usize {
        self.actual_accesses.get()
    }

    pub fn modes(&self) -> ModeFlags {
        self.modes
    }

    /// True when the read count is over the expectation.
    pub(crate) fn is_overread(&self) -> bool {
        self.expected_accesses
            .is_some_and(|expected| self.actual_accesses.get() > expected)
    }
}
