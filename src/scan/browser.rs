//! One-shot headless-browser process management. Each audit pays the full
//! launch/navigate/render cost; nothing is pooled. The invariant this module
//! exists for: the child process is released on every exit path.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::errors::A11yError;
use crate::utils::truncation::truncate_error;

/// A spawned driver process. The handle is taken out of the option the
/// moment the process is awaited, so after `wait_output` or `close` returns
/// (on any path) the handle is gone and the process is dead or reaped.
pub struct AuditProcess {
    child: Option<Child>,
}

impl AuditProcess {
    /// Launch `command` with the given arguments, capturing stdout/stderr.
    pub fn spawn(command: &str, args: &[&str]) -> Result<Self, A11yError> {
        let child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| A11yError::Browser(format!("Failed to launch {}: {}", command, e)))?;

        debug!(command, "Spawned audit driver process");
        Ok(Self { child: Some(child) })
    }

    /// True once the process handle has been released.
    pub fn is_closed(&self) -> bool {
        self.child.is_none()
    }

    /// Wait for the process to exit and return its stdout, enforcing a
    /// deadline. The handle is consumed up front: on timeout the in-flight
    /// future (which owns the child) is dropped and kill_on_drop reaps it;
    /// on failure the child has already exited.
    pub async fn wait_output(&mut self, deadline: Duration) -> Result<String, A11yError> {
        let child = self
            .child
            .take()
            .ok_or_else(|| A11yError::Browser("Audit process already closed".into()))?;

        let output = tokio::time::timeout(deadline, child.wait_with_output())
            .await
            .map_err(|_| A11yError::Timeout("Audit driver timed out".into()))?
            .map_err(|e| A11yError::Browser(format!("Audit driver failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(A11yError::Browser(format!(
                "Audit driver exited with {}: {}",
                output.status,
                truncate_error(stderr.trim())
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Kill the process if it is still held. Safe to call on any state.
    pub async fn close(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.start_kill();
            let _ = child.wait().await;
        }
    }
}

impl Drop for AuditProcess {
    fn drop(&mut self) {
        // Best-effort; kill_on_drop covers the child itself.
        if let Some(child) = &mut self.child {
            let _ = child.start_kill();
        }
    }
}
