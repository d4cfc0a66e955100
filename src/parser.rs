//! Parser for `system_profiler SPDisplaysDataType` text reports
//!
//! The report is indentation-structured. Every adapter's attributes sit at
//! six or more leading spaces, and a contiguous run of such lines forms one
//! device block:
//!
//! ```text
//! Graphics/Displays:
//!     Intel UHD Graphics 630:
//!       Chipset Model: Intel UHD Graphics 630
//!       Bus: Built-In
//!     Radeon Pro 560X:
//!       Chipset Model: Radeon Pro 560X
//!       Bus: PCIe
//! ```

use crate::error::{ResolveError, ResolveResult};
use crate::selection::BUILT_IN_BUS;
use serde::{Deserialize, Serialize};

/// Section header the first report line must contain
pub const DISPLAYS_HEADER: &str = "Graphics/Displays:";

/// Leading spaces that mark a device block line
pub const DEVICE_INDENT: usize = 6;

const CHIPSET_MODEL_PREFIX: &str = "Chipset Model: ";
const BUS_PREFIX: &str = "Bus: ";

/// One graphics adapter as read from a device block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// Chipset model, empty if the block had none
    pub name: String,
    /// Bus type, empty if the block had none
    pub bus: String,
}

impl AdapterRecord {
    /// Create a record from its two fields
    pub fn new(name: impl Into<String>, bus: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bus: bus.into(),
        }
    }

    /// Integrated adapter (bus reported as `Built-In`)
    pub fn is_built_in(&self) -> bool {
        self.bus == BUILT_IN_BUS
    }

    /// Any adapter that is not built in, including one with no bus line
    pub fn is_discrete(&self) -> bool {
        !self.is_built_in()
    }
}

/// Decides whether a line belongs to a device block
///
/// The same predicate opens a block and keeps it going, so a block ends at
/// the first line it rejects.
pub trait BlockDelimiter {
    /// Returns true if `line` is part of a device block
    fn is_block_line(&self, line: &str) -> bool;
}

impl<F> BlockDelimiter for F
where
    F: Fn(&str) -> bool,
{
    fn is_block_line(&self, line: &str) -> bool {
        self(line)
    }
}

/// Matches lines starting with at least the given number of spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation(pub usize);

impl Default for Indentation {
    fn default() -> Self {
        Indentation(DEVICE_INDENT)
    }
}

impl BlockDelimiter for Indentation {
    fn is_block_line(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        bytes.len() >= self.0 && bytes[..self.0].iter().all(|&b| b == b' ')
    }
}

/// Split report text into lines, dropping empty ones
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.is_empty()).collect()
}

/// Check that the first line carries the section header
pub fn validate_header(lines: &[&str], marker: &str) -> ResolveResult<()> {
    match lines.first() {
        Some(first) if first.contains(marker) => Ok(()),
        Some(first) => Err(ResolveError::UnexpectedFormat(first.to_string())),
        None => Err(ResolveError::UnexpectedFormat(String::new())),
    }
}

/// Group lines into device blocks and read one record per block
///
/// Blocks missing a field still produce a record, with that field empty.
/// If a field repeats inside a block the last value is kept.
pub fn parse_blocks<D>(lines: &[&str], delimiter: &D) -> Vec<AdapterRecord>
where
    D: BlockDelimiter + ?Sized,
{
    let mut records = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if !delimiter.is_block_line(lines[index]) {
            index += 1;
            continue;
        }

        let mut record = AdapterRecord::default();

        while index < lines.len() && delimiter.is_block_line(lines[index]) {
            let trimmed = lines[index].trim();

            if let Some(name) = trimmed.strip_prefix(CHIPSET_MODEL_PREFIX) {
                record.name = name.to_string();
            } else if let Some(bus) = trimmed.strip_prefix(BUS_PREFIX) {
                record.bus = bus.to_string();
            }

            index += 1;
        }

        records.push(record);
    }

    records
}

/// Validate and parse a complete report
pub fn parse_report<D>(
    text: &str,
    header_marker: &str,
    delimiter: &D,
) -> ResolveResult<Vec<AdapterRecord>>
where
    D: BlockDelimiter + ?Sized,
{
    let lines = split_lines(text);
    validate_header(&lines, header_marker)?;
    Ok(parse_blocks(&lines, delimiter))
}
