//! Core types for Proofscope

use serde::Deserialize;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque witness value - cheaply cloneable, never interpreted here
#[derive(Clone)]
pub struct Witness(Rc<dyn Any>);

impl Witness {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Witness(..)")
    }
}

/// The "self" party a context refers to.
///
/// Actors are owned elsewhere; a context only ever holds a `Weak` to one.
pub trait Actor: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

/// Execution-phase flags, each toggled independently by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModeFlags {
    pub in_prover: bool,
    pub in_compile: bool,
    pub in_checked_computation: bool,
    pub in_analyze: bool,
}

impl ModeFlags {
    /// Compiling and proving both run checked computations.
    pub fn checked_computation(&self) -> bool {
        self.in_compile || self.in_prover || self.in_checked_computation
    }
}
