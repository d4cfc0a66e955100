//! # GPUNAME - Graphics Adapter Name Resolution
//!
//! A small Rust library that reports the name of the most relevant graphics
//! adapter on macOS by parsing `system_profiler SPDisplaysDataType` output.
//!
//! ## Features
//!
//! - **Discrete first**: any non built-in GPU is preferred over the integrated one
//! - **Offline parsing** of saved profiler reports
//! - **Pluggable command runner** for tests and custom tooling
//! - **Injected observer** instead of a global logger
//! - **JSON export** of parsed adapters
//!
//! ## Quick Start
//!
//! ```no_run
//! let name = gpuname::get_gpu_name();
//! if name.is_empty() {
//!     println!("GPU: unknown");
//! } else {
//!     println!("GPU: {}", name);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod observer;
pub mod parser;
pub mod resolver;
pub mod runner;
pub mod selection;

// Re-export main API for easy access
pub use error::{ResolveError, ResolveResult};
pub use observer::{LogObserver, NoopObserver, ResolveObserver};
pub use parser::{parse_blocks, parse_report, AdapterRecord, BlockDelimiter, Indentation};
pub use resolver::{GpuNameResolver, Resolution, ResolverConfig};
pub use runner::{CommandRunner, ReplayRunner, SystemCommandRunner};
pub use selection::{select_adapter_name, BUILT_IN_BUS, NO_GPU_FOUND};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the most relevant graphics adapter
///
/// Returns the last discrete adapter listed, else the first built-in one,
/// else `"No GPU found"`. An empty string means the profiler could not be
/// queried or its output was not understood.
///
/// # Example
///
/// ```no_run
/// let name = gpuname::get_gpu_name();
/// println!("Found GPU: {}", name);
/// ```
pub fn get_gpu_name() -> String {
    GpuNameResolver::new().resolve()
}

/// Every adapter the system profiler reports
///
/// # Example
///
/// ```no_run
/// for adapter in gpuname::list_adapters()? {
///     println!("{} ({})", adapter.name, adapter.bus);
/// }
/// # Ok::<(), gpuname::ResolveError>(())
/// ```
pub fn list_adapters() -> ResolveResult<Vec<AdapterRecord>> {
    GpuNameResolver::new().adapters()
}

/// Run a quick compatibility check
///
/// Returns `true` if the system profiler is present at its default path.
/// Use [`GpuNameResolver::is_supported`] for a resolver with a custom
/// `program`.
pub fn is_supported() -> bool {
    Path::new(resolver::SYSTEM_PROFILER).exists()
}

/// Get library information
pub fn version() -> &'static str {
    VERSION
}


/// Prelude module for convenient imports
///
/// # Example
///
/// ```no_run
/// use gpuname::prelude::*;
///
/// let name = GpuNameResolver::new().resolve();
/// ```
pub mod prelude {
    pub use crate::parser::AdapterRecord;
    pub use crate::resolver::{GpuNameResolver, Resolution, ResolverConfig};
    pub use crate::runner::{CommandRunner, ReplayRunner};
    pub use crate::{get_gpu_name, is_supported, list_adapters, version};
}
