use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tempfile::{Builder, NamedTempFile, TempPath};
use tokio::process::Command;

use crate::application::ports::{ConcatenationError, VideoConcatenator};
use crate::domain::{SanitizedWord, TemporaryVideo, VIDEO_EXTENSION};

const OUTPUT_PREFIX: &str = "sign_language";
const NAME_HINT_WORDS: usize = 3;

/// Joins clips with ffmpeg's concat demuxer using stream copy.
///
/// The manifest and the reserved output file are `tempfile` guards: they are
/// removed when dropped, so an error or a cancelled future cleans up after
/// itself. On success the output guard is handed to the caller. The child
/// process is killed if the future is dropped mid-run.
pub struct FfmpegConcatenator {
    binary: PathBuf,
    output_dir: PathBuf,
}

impl FfmpegConcatenator {
    pub fn new(binary: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns whether the configured binary can be launched at all.
    pub async fn is_available(&self) -> bool {
        match Command::new(&self.binary)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!(error = %e, binary = %self.binary.display(), "Media tool check failed");
                false
            }
        }
    }

    fn write_manifest(&self, paths: &[PathBuf]) -> Result<NamedTempFile, ConcatenationError> {
        let mut manifest = Builder::new()
            .prefix("concat_")
            .suffix(".txt")
            .tempfile_in(&self.output_dir)
            .map_err(ConcatenationError::TempFile)?;

        manifest
            .write_all(build_manifest(paths).as_bytes())
            .and_then(|_| manifest.flush())
            .map_err(ConcatenationError::TempFile)?;

        Ok(manifest)
    }

    fn reserve_output(&self, name_hint: &[String]) -> Result<TempPath, ConcatenationError> {
        let prefix = output_prefix(name_hint);
        let suffix = format!(".{}", VIDEO_EXTENSION);
        let file = Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(&self.output_dir)
            .map_err(ConcatenationError::TempFile)?;

        Ok(file.into_temp_path())
    }
}

#[async_trait]
impl VideoConcatenator for FfmpegConcatenator {
    async fn concatenate(
        &self,
        paths: &[PathBuf],
        name_hint: &[String],
    ) -> Result<TemporaryVideo, ConcatenationError> {
        if paths.is_empty() {
            return Err(ConcatenationError::NoInputs);
        }

        let manifest = self.write_manifest(paths)?;
        let output = self.reserve_output(name_hint)?;

        let mut command = Command::new(&self.binary);
        command
            .args(["-hide_banner", "-loglevel", "error"])
            .args(["-f", "concat", "-safe", "0", "-i"])
            .arg(manifest.path())
            .args(["-c", "copy", "-y"])
            .arg(&*output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(
            clips = paths.len(),
            output = %output.display(),
            "Starting clip concatenation"
        );

        let result = command.output().await;

        if let Err(e) = manifest.close() {
            tracing::warn!(error = %e, "Failed to remove concat manifest");
        }

        let process_output = result.map_err(ConcatenationError::SpawnFailed)?;

        if !process_output.status.success() {
            let stderr = String::from_utf8_lossy(&process_output.stderr)
                .trim()
                .to_string();
            tracing::warn!(status = %process_output.status, stderr = %stderr, "Media tool failed");
            return Err(ConcatenationError::ToolFailed {
                status: process_output.status.to_string(),
                stderr,
            });
        }

        let written = tokio::fs::metadata(&*output)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if written == 0 {
            return Err(ConcatenationError::EmptyOutput);
        }

        tracing::info!(
            clips = paths.len(),
            bytes = written,
            output = %output.display(),
            "Clips concatenated"
        );

        Ok(TemporaryVideo::new(output))
    }
}

/// Renders concat-demuxer lines, one `file '<path>'` per clip.
pub fn build_manifest(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("file '{}'\n", escape_manifest_path(&p.to_string_lossy())))
        .collect()
}

fn escape_manifest_path(path: &str) -> String {
    path.replace('\'', r"'\''")
}

/// Filename prefix built from the first few words, e.g. `sign_language_hello_world_`.
pub fn output_prefix(name_hint: &[String]) -> String {
    let words: Vec<String> = name_hint
        .iter()
        .map(|w| SanitizedWord::new(w))
        .filter(|w| !w.is_empty())
        .take(NAME_HINT_WORDS)
        .map(SanitizedWord::into_inner)
        .collect();

    if words.is_empty() {
        format!("{}_", OUTPUT_PREFIX)
    } else {
        format!("{}_{}_", OUTPUT_PREFIX, words.join("_"))
    }
}
