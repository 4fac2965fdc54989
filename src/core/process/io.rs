// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output forwarding and waiting for processes.
//!
//! ```text
//! run_child_with_cancellation()
//!   stdout/stderr reader tasks --> tracing
//!   wait (or cancel + kill)
//!   --> ProcessOutput { exit_code, interrupted }
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::Result;

fn spawn_reader<R>(
    stream: Option<R>,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move {
            forward_lines(stream, &name, stream_name).await;
        })
    })
}

async fn await_readers(handles: [Option<JoinHandle<()>>; 2]) {
    for handle in handles.into_iter().flatten() {
        let _ = handle.await;
    }
}

impl ProcessBuilder {
    /// Waits for the child, killing it if `token` is cancelled first.
    pub(super) async fn run_child_with_cancellation(
        name: &str,
        child: &mut Child,
        token: CancellationToken,
    ) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), name, "stderr");

        let (exit_status, interrupted) = tokio::select! {
            status = child.wait() => (status.with_context(|| format!("failed waiting for {name}"))?, false),
            () = token.cancelled() => {
                debug!(process = %name, "cancellation requested, terminating process");
                child.kill().await.ok();
                let status = child.wait().await
                    .with_context(|| format!("failed waiting for process {name} to exit"))?;
                (status, true)
            }
        };

        await_readers([stdout_handle, stderr_handle]).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            interrupted,
        ))
    }
}

async fn forward_lines<R>(reader: R, process_name: &str, stream_name: &str)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        debug!(process = %process_name, stream = %stream_name, line = %line, "output");
    }
}
