use std::process::ExitStatus;

use thiserror::Error;

use crate::drive::DriveError;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("`{program}` exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    #[error("invalid createdTime `{value}`: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Drive error: {0}")]
    Drive(#[from] DriveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps a non-zero exit status to [`DumpError::CommandFailed`].
pub(crate) fn ensure_success(program: &str, status: ExitStatus) -> Result<(), DumpError> {
    if status.success() {
        Ok(())
    } else {
        Err(DumpError::CommandFailed {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
        })
    }
}
