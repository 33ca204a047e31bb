//! Logging setup and crash reporting.
//!
//! ```ignore
//! use carecompare::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(verbosity);
//! }
//! ```
//!
//! `log` records emitted by the config loader are bridged into the same
//! subscriber through `tracing-subscriber`'s `tracing-log` support.

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{default_directive, init_tracing};
pub use panic_hook::install_panic_hook;
