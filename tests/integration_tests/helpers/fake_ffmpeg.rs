use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Shell script standing in for ffmpeg.
///
/// The manifest is the ninth argument and the output path is the last one,
/// matching the argument order the concatenator uses.
pub struct FakeFfmpeg {
    dir: TempDir,
    binary: PathBuf,
}

impl FakeFfmpeg {
    /// Copies the manifest aside and writes `data` to the output path.
    pub fn succeeding(data: &str) -> Self {
        Self::with_body(&format!(
            "cp \"$9\" \"$(dirname \"$0\")/captured_manifest.txt\"\nfor last; do :; done\nprintf '{}' > \"$last\"\n",
            data
        ))
    }

    /// Fills the output path with `bytes` zero bytes. `exec` keeps the writer
    /// in the process that gets killed when the job is dropped.
    pub fn writing_bytes(bytes: usize) -> Self {
        Self::with_body(&format!(
            "for last; do :; done\nexec head -c {} /dev/zero > \"$last\"\n",
            bytes
        ))
    }

    /// Runs for `seconds` without producing anything.
    pub fn sleeping(seconds: u32) -> Self {
        Self::with_body(&format!("exec sleep {}\n", seconds))
    }

    /// Exits non-zero with a message on stderr.
    pub fn failing(stderr: &str) -> Self {
        Self::with_body(&format!("echo '{}' >&2\nexit 1\n", stderr))
    }

    /// Exits zero without writing anything.
    pub fn silent() -> Self {
        Self::with_body("exit 0\n")
    }

    fn with_body(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create fake ffmpeg dir");
        let binary = dir.path().join("ffmpeg");
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"-version\" ]; then exit 0; fi\n{}",
            body
        );
        std::fs::write(&binary, script).expect("Failed to write fake ffmpeg");
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake ffmpeg executable");

        Self { dir, binary }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn captured_manifest(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join("captured_manifest.txt")).ok()
    }
}
