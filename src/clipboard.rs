//! System clipboard access.
//!
//! On Linux the copy is handed to `wl-copy`, `xclip` or `xsel` when one is
//! installed, since those keep serving the selection after gtex exits.
//! Otherwise an `arboard` handle is kept open for the life of the app; X11
//! and Wayland drop the contents as soon as the owning handle is dropped.

use arboard::Clipboard;
use thiserror::Error;
use tracing::debug;

/// External copy tools tried in order: program and its arguments
#[cfg(target_os = "linux")]
const LINUX_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy: {0}")]
    Copy(#[source] arboard::Error),
}

#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl SystemClipboard {
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        if let Some(tool) = copy_with_tools(LINUX_TOOLS, text) {
            debug!(tool, len = text.len(), "Copied to clipboard");
            return Ok(());
        }

        let mut handle = match self.handle.take() {
            Some(handle) => handle,
            None => Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        // On failure the handle is dropped and reopened by the next copy
        handle.set_text(text.to_string()).map_err(ClipboardError::Copy)?;
        self.handle = Some(handle);

        debug!(len = text.len(), "Copied to clipboard");
        Ok(())
    }
}

/// Pipe `text` into the first tool that accepts it
#[cfg(unix)]
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn copy_with_tools<'a>(tools: &[(&'a str, &[&str])], text: &str) -> Option<&'a str> {
    tools
        .iter()
        .find(|(program, args)| pipe_to(program, args, text))
        .map(|(program, _)| *program)
}

#[cfg(unix)]
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let written = child
        .stdin
        .take()
        .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());

    child.wait().is_ok_and(|status| status.success()) && written
}
