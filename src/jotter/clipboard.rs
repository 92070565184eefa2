//! Clipboard collaborator used by the share command.
//!
//! The core only needs "put this plain text somewhere and tell me if it worked", so the
//! seam is the [`ClipboardSink`] trait. [`SystemClipboard`] is the OS-backed
//! implementation; tests use an in-memory sink.

use crate::error::{JotterError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(JotterError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| JotterError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| JotterError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| JotterError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(JotterError::Clipboard(format!("{} exited with error", program)))
    }
}

/// Records copied text instead of touching the OS clipboard.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

#[cfg(any(test, feature = "test_utils"))]
impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(JotterError::Clipboard("clipboard unavailable".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
