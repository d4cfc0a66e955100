//! Observer hooks the resolver reports progress to

use crate::error::ResolveError;
use crate::parser::AdapterRecord;

/// Receives events while a GPU name is being resolved
///
/// All methods default to doing nothing.
pub trait ResolveObserver {
    /// Full decoded profiler output
    fn output_captured(&self, _output: &str) {}

    /// A device block was parsed
    fn adapter_parsed(&self, _record: &AdapterRecord) {}

    /// The selected name changed
    fn name_selected(&self, _name: &str) {}

    /// Resolution failed and an empty name will be returned
    fn failed(&self, _error: &ResolveError) {}
}

impl<T: ResolveObserver + ?Sized> ResolveObserver for &T {
    fn output_captured(&self, output: &str) {
        (**self).output_captured(output)
    }

    fn adapter_parsed(&self, record: &AdapterRecord) {
        (**self).adapter_parsed(record)
    }

    fn name_selected(&self, name: &str) {
        (**self).name_selected(name)
    }

    fn failed(&self, error: &ResolveError) {
        (**self).failed(error)
    }
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ResolveObserver for LogObserver {
    fn output_captured(&self, output: &str) {
        log::info!("Output of gpu name command: {}", output);
    }

    fn adapter_parsed(&self, record: &AdapterRecord) {
        log::debug!("Parsed adapter {:?} on bus {:?}", record.name, record.bus);
    }

    fn name_selected(&self, name: &str) {
        log::info!("Set the gpu name to {}", name);
    }

    fn failed(&self, error: &ResolveError) {
        match error {
            ResolveError::Decode(_) => {
                log::error!(
                    "An error occurred while casting the command output to a string: {}",
                    error
                )
            }
            ResolveError::UnexpectedFormat(_) => {
                log::error!("Command to retrieve the GPU name failed: {}", error)
            }
            _ => log::error!("{}", error),
        }
    }
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}
