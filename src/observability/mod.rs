//! Observability for the stock service
//!
//! Logging goes through `tracing`; [`init_logging`] installs the
//! subscriber once at process start. Per-request spans come from the
//! `TraceLayer` on the HTTP router.

mod logging;

pub use logging::{init_logging, LogFormat};
