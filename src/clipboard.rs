//! System clipboard collaborator.
//!
//! Writes text by piping it to the platform's clipboard tool: `pbcopy`
//! on macOS, `clip` on Windows, `xclip` elsewhere on unix. The program
//! only ever writes; there is no paste direction.

use std::io;
use std::process::{Command, Stdio};

/// Write `text` to the system clipboard.
///
/// # Errors
/// Returns a message when the platform tool is missing or exits
/// unsuccessfully. Callers treating the write as best-effort need only
/// inspect success.
pub fn copy(text: &str) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        return pipe_to_command("pbcopy", &[], text);
    }

    #[cfg(target_os = "windows")]
    {
        return pipe_to_command("clip", &[], text);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return pipe_to_command("xclip", &["-selection", "clipboard"], text);
    }

    #[allow(unreachable_code)]
    Err("Clipboard not supported on this platform".to_string())
}

/// Spawn the clipboard tool and feed `text` to its stdin.
fn pipe_to_command(command: &str, args: &[&str], text: &str) -> Result<(), String> {
    use std::io::Write;

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| command_error(command, e))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes()).map_err(|e| e.to_string())?;
    }

    let status = child.wait().map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("Clipboard command '{command}' failed"))
    }
}

/// A missing tool gets a message naming it; everything else passes through.
fn command_error(command: &str, error: io::Error) -> String {
    if error.kind() == io::ErrorKind::NotFound {
        return format!(
            "Clipboard tool '{command}' not found. Install it or configure your PATH."
        );
    }
    error.to_string()
}

// ============================================================================
// TESTS
// ============================================================================
