//! Command execution for the system profiler
//!
//! The profiler is reached through [`CommandRunner`] so that parsing and
//! selection can be driven by captured output instead of a live process.

use crate::error::{ResolveError, ResolveResult};
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

/// Capability to run an external command and capture its standard output
pub trait CommandRunner {
    /// Run `program` with `args` to completion and return the raw stdout bytes
    fn run(&self, program: &str, args: &[String]) -> io::Result<Vec<u8>>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Vec<u8>> {
        (**self).run(program, args)
    }
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Vec<u8>> {
        // `output()` drains both pipes while waiting, so a chatty child cannot block on a full pipe
        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            log::warn!(
                "{} exited with {} ({} bytes of stderr)",
                program,
                output.status,
                output.stderr.len()
            );
        }

        Ok(output.stdout)
    }
}

/// Replays previously captured profiler output
#[derive(Debug, Clone, Default)]
pub struct ReplayRunner {
    output: Vec<u8>,
}

impl ReplayRunner {
    /// Replay the given bytes
    pub fn from_bytes(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Replay the contents of a saved report file
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            output: fs::read(path)?,
        })
    }
}

impl CommandRunner for ReplayRunner {
    fn run(&self, _program: &str, _args: &[String]) -> io::Result<Vec<u8>> {
        Ok(self.output.clone())
    }
}

/// Decode captured output as strict UTF-8
pub fn decode_output(bytes: Vec<u8>) -> ResolveResult<String> {
    String::from_utf8(bytes).map_err(ResolveError::from)
}
