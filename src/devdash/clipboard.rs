//! Best-effort system clipboard support, used by `snippet copy`.
//!
//! Shells out to whatever clipboard tool the platform ships rather
//! than linking a GUI stack. Failure here is never fatal; callers
//! downgrade it to a warning and fall back to printing the text.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{DashError, Result};

/// Pipes `text` into the first working clipboard tool for the platform.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = DashError::Api("No clipboard tool found".to_string());
    for candidate in candidates() {
        match pipe_to(candidate, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

#[cfg(target_os = "macos")]
fn candidates() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(target_os = "linux")]
fn candidates() -> &'static [&'static [&'static str]] {
    &[
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
        &["wl-copy"],
    ]
}

#[cfg(target_os = "windows")]
fn candidates() -> &'static [&'static [&'static str]] {
    &[&["clip"]]
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn candidates() -> &'static [&'static [&'static str]] {
    &[]
}

fn pipe_to(command: &[&str], text: &str) -> Result<()> {
    let (program, args) = match command.split_first() {
        Some(parts) => parts,
        None => return Err(DashError::Api("Empty clipboard command".to_string())),
    };
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(DashError::Api(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
