use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JheadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to start jhead: {0}")]
    JheadNotFound(#[source] std::io::Error),

    #[error("Invalid file pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("File not found: {path}. command_args={command_args}")]
    FileNotFound {
        path: PathBuf,
        command_args: String,
    },

    #[error("jhead exited with {status}: {std_err}. command_args={command_args}")]
    CommandFailed {
        status: std::process::ExitStatus,
        std_err: String,
        command_args: String,
    },

    #[error("Expected pattern '{pattern}' to match exactly one file, it matched {matched}")]
    NotOneFile { pattern: String, matched: usize },

    #[error("Unrecognized jhead output for pattern '{pattern}'")]
    UnexpectedOutput { pattern: String },

    #[error("jhead version banner not recognized: {banner}")]
    VersionNotRecognized { banner: String },
}
