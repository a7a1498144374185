//! Append-only output sink for translated chunks.
//!
//! The sink owns the output file for the duration of a file-mode run. Chunks
//! arrive over a capacity-1 channel, so the producer is never more than one
//! chunk ahead of the disk, and writes land in send order. Every chunk is
//! flushed before the next one is accepted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::status;

/// Append-only writer for the translation output file.
pub struct Sink {
    file: File,
    path: PathBuf,
}

impl Sink {
    /// Opens `path` for appending, creating it if missing. An existing file
    /// keeps its content: repeated runs against the same path are additive.
    pub async fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("failed to open output file: {}", path.display()))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Spawns the consumer task and hands back the producer side.
    ///
    /// Dropping the sender ends the task, which then resolves to the total
    /// byte count. Any write or flush failure aborts the task immediately;
    /// the error surfaces on join and the dangling sender starts failing.
    pub fn spawn(mut self) -> (mpsc::Sender<String>, JoinHandle<Result<u64>>) {
        let (tx, mut rx) = mpsc::channel::<String>(1);

        let handle = tokio::spawn(async move {
            let mut written: u64 = 0;
            while let Some(chunk) = rx.recv().await {
                self.file
                    .write_all(chunk.as_bytes())
                    .await
                    .with_context(|| format!("failed to write to {}", self.path.display()))?;
                self.file
                    .flush()
                    .await
                    .with_context(|| format!("failed to flush {}", self.path.display()))?;

                written += chunk.len() as u64;
                status!("wrote {} bytes", chunk.len());
            }
            Ok(written)
        });

        (tx, handle)
    }
}
