//! GPU name resolution on top of the profiler command

use crate::error::{ResolveError, ResolveResult};
use crate::observer::{LogObserver, ResolveObserver};
use crate::parser::{
    self, AdapterRecord, BlockDelimiter, Indentation, DEVICE_INDENT, DISPLAYS_HEADER,
};
use crate::runner::{decode_output, CommandRunner, SystemCommandRunner};
use crate::selection::select_adapter_name_observed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path of the macOS system profiler
pub const SYSTEM_PROFILER: &str = "/usr/sbin/system_profiler";

/// Profiler data type covering graphics adapters and displays
pub const DISPLAYS_DATA_TYPE: &str = "SPDisplaysDataType";

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Profiler executable
    pub program: String,
    /// Arguments passed to the profiler
    pub args: Vec<String>,
    /// Text the first output line must contain
    pub header_marker: String,
    /// Leading spaces that mark a device block line
    pub indent: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            program: SYSTEM_PROFILER.to_string(),
            args: vec![DISPLAYS_DATA_TYPE.to_string()],
            header_marker: DISPLAYS_HEADER.to_string(),
            indent: DEVICE_INDENT,
        }
    }
}

impl ResolverConfig {
    /// Default configuration with a different profiler executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration, filling omitted fields with defaults
    pub fn from_json_str(json: &str) -> ResolveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> ResolveResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Block delimiter matching the configured indentation
    pub fn delimiter(&self) -> Indentation {
        Indentation(self.indent)
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Selected adapter name, or `No GPU found`
    pub name: String,
    /// Every parsed adapter in report order
    pub adapters: Vec<AdapterRecord>,
    /// When the profiler output was parsed
    pub resolved_at: DateTime<Utc>,
}

/// Resolves the name of the most relevant graphics adapter
pub struct GpuNameResolver<R = SystemCommandRunner, O = LogObserver, D = Indentation> {
    config: ResolverConfig,
    runner: R,
    observer: O,
    delimiter: D,
}

impl GpuNameResolver {
    /// Resolver running the system profiler and logging through `log`
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Resolver for the given configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            delimiter: config.delimiter(),
            config,
            runner: SystemCommandRunner,
            observer: LogObserver,
        }
    }
}

impl Default for GpuNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O, D> GpuNameResolver<R, O, D>
where
    R: CommandRunner,
    O: ResolveObserver,
    D: BlockDelimiter,
{
    /// Replace the command runner
    pub fn with_runner<R2: CommandRunner>(self, runner: R2) -> GpuNameResolver<R2, O, D> {
        GpuNameResolver {
            config: self.config,
            runner,
            observer: self.observer,
            delimiter: self.delimiter,
        }
    }

    /// Replace the observer
    pub fn with_observer<O2: ResolveObserver>(self, observer: O2) -> GpuNameResolver<R, O2, D> {
        GpuNameResolver {
            config: self.config,
            runner: self.runner,
            observer,
            delimiter: self.delimiter,
        }
    }

    /// Replace the block delimiter
    ///
    /// The configured `indent` is ignored once another delimiter is set.
    pub fn with_delimiter<D2: BlockDelimiter>(self, delimiter: D2) -> GpuNameResolver<R, O, D2> {
        GpuNameResolver {
            config: self.config,
            runner: self.runner,
            observer: self.observer,
            delimiter,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether the configured profiler executable exists
    pub fn is_supported(&self) -> bool {
        Path::new(&self.config.program).exists()
    }

    /// Run the profiler and parse every adapter it reports
    pub fn adapters(&self) -> ResolveResult<Vec<AdapterRecord>> {
        let output = self
            .runner
            .run(&self.config.program, &self.config.args)
            .map_err(ResolveError::Spawn)?;
        let text = decode_output(output)?;

        self.observer.output_captured(&text);

        let records =
            parser::parse_report(&text, &self.config.header_marker, &self.delimiter)?;
        for record in &records {
            self.observer.adapter_parsed(record);
        }

        Ok(records)
    }

    /// Resolve the adapter name, reporting failures as errors
    pub fn try_resolve(&self) -> ResolveResult<Resolution> {
        let adapters = self.adapters()?;
        let name = select_adapter_name_observed(&adapters, &self.observer);

        Ok(Resolution {
            name,
            adapters,
            resolved_at: Utc::now(),
        })
    }

    /// Resolve the adapter name
    ///
    /// Returns the empty string if the profiler could not be run, its output
    /// was not UTF-8, or the output did not start with the displays header.
    pub fn resolve(&self) -> String {
        match self.try_resolve() {
            Ok(resolution) => resolution.name,
            Err(e) => {
                self.observer.failed(&e);
                String::new()
            }
        }
    }
}
