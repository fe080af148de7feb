//! Reads of the installed context: the counting accessor and mode predicates.

use crate::context::ExecutionContext;
use crate::store;
use proofscope_core::{ConflictKind, Error, ModeFlags, Result};
use std::rc::Rc;
use tracing::{trace, warn};

/// The installed context, counting one access against it.
///
/// Fails with a conflict when no scope is active, or when this read takes the
/// count past `expected_accesses`. In the second case the count has already
/// been bumped.
pub fn current() -> Result<Rc<ExecutionContext>> {
    let Some(ctx) = store::get() else {
        warn!("context read with no scope active");
        return Err(Error::conflict(ConflictKind::NoContext));
    };
    let actual = ctx.record_access();
    trace!(actual, expected = ?ctx.expected_accesses(), "context read");
    if ctx.is_overread() {
        let expected = ctx.expected_accesses().unwrap_or_default();
        warn!(expected, actual, "context read more often than expected");
        return Err(Error::conflict(ConflictKind::Overread { expected, actual }));
    }
    Ok(ctx)
}

fn modes() -> ModeFlags {
    store::get().map(|ctx| ctx.modes()).unwrap_or_default()
}

pub fn is_prover() -> bool {
    modes().in_prover
}

pub fn is_compile() -> bool {
    modes().in_compile
}

/// Compile, prove, or an explicit checked computation.
pub fn is_checked_computation() -> bool {
    modes().checked_computation()
}

pub fn is_analyze() -> bool {
    modes().in_analyze
}
