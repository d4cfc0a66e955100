//! Picks the adapter name to report

use crate::observer::{NoopObserver, ResolveObserver};
use crate::parser::AdapterRecord;

/// Returned when no device block was found
pub const NO_GPU_FOUND: &str = "No GPU found";

/// Bus value of integrated adapters
pub const BUILT_IN_BUS: &str = "Built-In";

/// Select the adapter name to report
///
/// Every discrete adapter overwrites the previous choice, so the last one
/// listed wins. A built-in adapter is taken only while nothing has been
/// selected yet, which makes it a fallback for the first integrated GPU.
pub fn select_adapter_name(records: &[AdapterRecord]) -> String {
    select_adapter_name_observed(records, &NoopObserver)
}

/// Same as [`select_adapter_name`], reporting every assignment to `observer`
pub fn select_adapter_name_observed<O>(records: &[AdapterRecord], observer: &O) -> String
where
    O: ResolveObserver + ?Sized,
{
    let mut selected = NO_GPU_FOUND.to_string();

    for record in records {
        if record.bus != BUILT_IN_BUS {
            selected = record.name.clone();
            observer.name_selected(&selected);
        } else if selected == NO_GPU_FOUND {
            selected = record.name.clone();
            observer.name_selected(&selected);
        }
    }

    selected
}
