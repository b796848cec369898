use std::io;
use std::path::PathBuf;

/// Errors surfaced to whoever drives the interpreter.
///
/// Unknown opcodes are not errors; see `Cycle::Unknown`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to open ROM {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("unable to read ROM: {0}")]
    Read(#[from] io::Error),

    #[error("stack overflow: call at {pc:#05X} exceeds the maximum depth")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
