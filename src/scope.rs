//! Scope executors
//!
//! Each executor builds a fresh [`ExecutionContext`] from the caller's
//! options, installs it for the duration of the body, and puts the previous
//! context back however the body exits. The final context is returned next to
//! the body's result so callers can audit how often it was read.
//!
//! Scopes nest: an inner scope hands control back to the outer one's context
//! on exit. Overlapping asynchronous scopes on one thread are not supported;
//! they overwrite each other's slot, and the access-count check in
//! [`run_scoped_async`] is the only thing that notices.

use crate::context::ExecutionContext;
use crate::store::ScopeGuard;
use proofscope_core::{ConflictKind, Error, ScopeOptions};
use std::future::Future;
use tracing::{debug, warn};

/// Asynchronous scopes expect one accessor read unless told otherwise.
pub const DEFAULT_ASYNC_EXPECTED_ACCESSES: usize = 1;

fn enter(options: ScopeOptions, default_expected: Option<usize>) -> ScopeGuard {
    let ctx = ExecutionContext::from_options(options, default_expected);
    debug!(
        expected = ?ctx.expected_accesses(),
        modes = ?ctx.modes(),
        witnesses = ctx.witnesses().map_or(0, |w| w.len()),
        "entering scope"
    );
    ScopeGuard::install(ctx)
}

fn exit(guard: ScopeGuard) -> ExecutionContext {
    let ctx = guard.finish();
    debug!(
        actual = ctx.actual_accesses(),
        expected = ?ctx.expected_accesses(),
        "left scope"
    );
    ctx
}

/// Run a non-suspending body inside a new context.
///
/// No count check happens here; an over-read still fails at the accessor.
pub fn run_scoped<T, F>(options: ScopeOptions, body: F) -> (ExecutionContext, T)
where
    F: FnOnce() -> T,
{
    let guard = enter(options, None);
    let result = body();
    (exit(guard), result)
}

/// Like [`run_scoped`] for a fallible body. A body error propagates unchanged
/// once the previous context is back in place.
pub fn try_run_scoped<T, E, F>(options: ScopeOptions, body: F) -> Result<(ExecutionContext, T), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let guard = enter(options, None);
    let result = body();
    let ctx = exit(guard);
    result.map(|value| (ctx, value))
}

/// Run a suspending body inside a new context.
///
/// `expected_accesses` defaults to [`DEFAULT_ASYNC_EXPECTED_ACCESSES`]. Once
/// the body resolves successfully the context's read count must equal the
/// expectation, otherwise the call fails with a conflict even though the body
/// itself succeeded. A body error skips the check and propagates unchanged.
///
/// The returned future is `!Send`: the context slot is per thread, so the
/// scope must stay on the thread that entered it.
pub async fn run_scoped_async<T, E, F, Fut>(
    options: ScopeOptions,
    body: F,
) -> Result<(ExecutionContext, T), E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Error>,
{
    let guard = enter(options, Some(DEFAULT_ASYNC_EXPECTED_ACCESSES));
    let value = body().await?;

    let mismatch = match guard.occupant() {
        Some(ctx) if ctx.expected_accesses() == Some(ctx.actual_accesses()) => None,
        Some(ctx) => Some(ConflictKind::CountMismatch {
            expected: ctx.expected_accesses(),
            actual: ctx.actual_accesses(),
        }),
        None => Some(ConflictKind::Displaced {
            actual: guard.installed().actual_accesses(),
        }),
    };

    let ctx = exit(guard);
    if let Some(kind) = mismatch {
        warn!(%kind, "asynchronous scope access count mismatch");
        return Err(Error::conflict(kind).into());
    }
    Ok((ctx, value))
}
