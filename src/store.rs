//! The context slot.
//!
//! One slot per thread, holding at most one installed context. Only
//! [`ScopeGuard`] writes it: installing saves the previous value, and dropping
//! the guard puts that value back on every exit path.

use crate::context::ExecutionContext;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static CURRENT: RefCell<Option<Rc<ExecutionContext>>> = const { RefCell::new(None) };
}

/// The installed context, if any.
pub(crate) fn get() -> Option<Rc<ExecutionContext>> {
    CURRENT.with(|slot| slot.borrow().clone())
}

fn replace(next: Option<Rc<ExecutionContext>>) -> Option<Rc<ExecutionContext>> {
    CURRENT.with(|slot| slot.replace(next))
}

/// Whether any scope is active on this thread.
pub fn is_active() -> bool {
    CURRENT.with(|slot| slot.borrow().is_some())
}

/// Copy of the installed context. Does not count as an accessor read.
pub fn snapshot() -> Option<ExecutionContext> {
    get().map(|ctx| (*ctx).clone())
}

/// Restores the previous context on drop.
pub(crate) struct ScopeGuard {
    installed: Rc<ExecutionContext>,
    prev: Option<Option<Rc<ExecutionContext>>>,
}

impl ScopeGuard {
    pub(crate) fn install(ctx: ExecutionContext) -> Self {
        let installed = Rc::new(ctx);
        let prev = replace(Some(installed.clone()));
        Self {
            installed,
            prev: Some(prev),
        }
    }

    pub(crate) fn installed(&self) -> &ExecutionContext {
        &self.installed
    }

    /// Whatever occupies the slot right now. Under correct use this is the
    /// context this guard installed; overlapping scopes may have swapped it.
    pub(crate) fn occupant(&self) -> Option<Rc<ExecutionContext>> {
        get()
    }

    /// Restore the previous context and hand back the final state.
    ///
    /// The final state is the slot's occupant at exit, or this guard's own
    /// context if the slot was emptied underneath it.
    pub(crate) fn finish(mut self) -> ExecutionContext {
        let last = self
            .restore()
            .unwrap_or_else(|| Rc::clone(&self.installed));
        // release our handle so an unshared context can be moved out
        drop(self);
        Rc::try_unwrap(last).unwrap_or_else(|shared| (*shared).clone())
    }

    fn restore(&mut self) -> Option<Rc<ExecutionContext>> {
        match self.prev.take() {
            Some(prev) => replace(prev),
            None => None,
        }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
