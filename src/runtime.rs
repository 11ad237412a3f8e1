//! Running asynchronous content reads from synchronous code.
//!
//! The http-library transport yields body text through a future, but
//! normalization is a synchronous call. The helper here bridges the two
//! without caring whether the caller already sits inside a tokio runtime.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime};

// Shared across all normalization calls.
static MANAGED_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Create a new tokio runtime for blocking operations
fn create_managed_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create managed tokio runtime")
}

/// Execute an async task with proper runtime handling
pub(crate) fn execute_with_runtime<F, Fut, T>(task: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    if Handle::try_current().is_ok() {
        // Inside tokio runtime - use block_in_place + Handle::block_on
        tokio::task::block_in_place(|| Handle::current().block_on(task()))
    } else {
        // Outside tokio runtime - use managed runtime
        let runtime = MANAGED_RUNTIME.get_or_init(create_managed_runtime);
        runtime.block_on(task())
    }
}
