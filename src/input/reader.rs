use anyhow::{Context, Result, bail};
use std::fs;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads the source document, capping the size so a stray path cannot
    /// flood the translation backend.
    pub fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("failed to access file: {path}"))?;

        if !metadata.is_file() {
            bail!("not a regular file: {path}");
        }

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "input size ({:.1} MB) exceeds the maximum of 1 MB; split the file first",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
    }
}
