//! Copying recipe text to the system clipboard.

use std::process::Stdio;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Somewhere text can be copied to.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard helpers tried in order: (program, args, needs Wayland).
const HELPERS: &[(&str, &[&str], bool)] = &[
    ("wl-copy", &[], true),
    ("xclip", &["-selection", "clipboard"], false),
    ("pbcopy", &[], false),
];

/// Pipes text into the first clipboard helper that works.
pub struct SystemClipboard;

impl SystemClipboard {
    async fn pipe(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("{program} has no stdin"))?;
        stdin.write_all(text.as_bytes()).await?;
        drop(stdin);

        let status = child.wait().await?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        let mut last_error =
            anyhow!("no clipboard helper found (install wl-clipboard, xclip or pbcopy)");

        for (program, args, needs_wayland) in HELPERS {
            if *needs_wayland && !wayland {
                continue;
            }
            match Self::pipe(program, args, text).await {
                Ok(()) => {
                    tracing::debug!(
                        helper = *program,
                        bytes = text.len(),
                        "copied to clipboard"
                    );
                    return Ok(());
                }
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

/// Keeps copied text in memory. For tests and headless runs.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy.
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Everything copied so far, oldest first.
    pub fn contents(&self) -> Vec<String> {
        self.contents
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            bail!("clipboard unavailable");
        }
        self.contents
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
