//! Proofscope - execution context for compile, prove, and analysis passes
//!
//! Code running inside a pass reads the ambient actor, witnesses, and mode
//! flags through [`current`] and the `is_*` predicates. Passes wrap their work
//! in [`run_scoped`] or [`run_scoped_async`], which install a fresh context and
//! restore the previous one on exit.

pub mod access;
pub mod context;
pub mod logging;
pub mod scope;
pub mod store;

pub use access::{current, is_analyze, is_checked_computation, is_compile, is_prover};
pub use context::ExecutionContext;
pub use logging::init_tracing;
pub use proofscope_core::*;
pub use scope::{run_scoped, run_scoped_async, try_run_scoped, DEFAULT_ASYNC_EXPECTED_ACCESSES};
pub use store::{is_active, snapshot};
