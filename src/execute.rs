use crate::error::JheadError;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `jhead {args...}` once and returns the raw stdout bytes.
///
/// jhead has no batch mode, so every operation is a fresh process. Errors
/// are classified from stderr first: the tool reports unreadable files on
/// stderr and may still exit zero, so the exit status alone is not enough.
pub(crate) fn execute_bytes(executable: &Path, args: &[&str]) -> Result<Vec<u8>, JheadError> {
    debug!("running {} {}", executable.display(), args.join(" "));

    let output = Command::new(executable)
        .args(args)
        .output()
        .map_err(JheadError::JheadNotFound)?;

    let command_args = args.join(" ");
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut noise = Vec::new();
    for line in stderr.lines() {
        if let Some(path) = cant_open_path(line) {
            return Err(JheadError::FileNotFound { path, command_args });
        }
        if line.trim_start().starts_with("Nonfatal Error") {
            warn!("jhead: {}", line.trim());
        } else if !line.trim().is_empty() {
            noise.push(line);
        }
    }

    if !output.status.success() {
        return Err(JheadError::CommandFailed {
            status: output.status,
            std_err: stderr.trim().to_string(),
            command_args,
        });
    }

    // Leftover stderr chatter on a clean exit is not worth failing over.
    for line in noise {
        warn!("jhead: {}", line.trim());
    }

    Ok(output.stdout)
}

/// Runs `jhead {args...}` and returns the trimmed stdout text.
pub(crate) fn execute_text(executable: &Path, args: &[String]) -> Result<String, JheadError> {
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let bytes = execute_bytes(executable, &arg_refs)?;
    Ok(String::from_utf8(bytes)?.trim().to_string())
}

/// jhead reports an unreadable file as `can't open '<path>'`.
fn cant_open_path(line: &str) -> Option<PathBuf> {
    let marker = "can't open '";
    let start = line.to_ascii_lowercase().find(marker)?;
    let rest = &line[start + marker.len()..];
    let end = rest.find('\'')?;
    Some(PathBuf::from(&rest[..end]))
}
