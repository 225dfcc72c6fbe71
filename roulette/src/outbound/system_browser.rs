//! Link opener delegating to the platform's default URL handler.

use std::process::Stdio;

use tokio::process::Command;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ports::{LinkOpener, LinkOpenerError};

/// Opener spawning `open`, `cmd /C start`, or `xdg-open` without waiting.
///
/// The launcher exits as soon as it has passed the link on. A detached task
/// waits for it so no zombie is left behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url);
            command
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            // The empty argument is the window title `start` expects first.
            command.args(["/C", "start", ""]).arg(url);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
    }
}

/// Spawn `command` with detached stdio and reap it in the background.
fn launch(mut command: Command, url: &str) -> Result<JoinHandle<()>, LinkOpenerError> {
    let runtime = Handle::try_current()
        .map_err(|error| LinkOpenerError::launch(format!("no async runtime: {error}")))?;
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| LinkOpenerError::launch(error.to_string()))?;
    debug!(pid = child.id(), %url, "link handed to platform opener");
    Ok(runtime.spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => debug!("platform opener exited"),
            Ok(status) => warn!(%status, "platform opener reported failure"),
            Err(error) => warn!(%error, "failed to wait for platform opener"),
        }
    }))
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenerError> {
        launch(Self::command(url), url).map(drop)
    }
}
