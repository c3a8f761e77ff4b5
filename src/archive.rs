//! Tar.gz packaging of the captured dump files.

use std::path::Path;

use tokio::process::Command;

use crate::error::{DumpError, ensure_success};

/// Compresses `members` (file names relative to `dir`) into `archive` using
/// the external `tar` utility. Running tar from `dir` keeps the bare file
/// names as the archive member names.
pub async fn create_tar_gz(
    archive: &Path,
    dir: &Path,
    members: &[&str],
) -> Result<(), DumpError> {
    let status = Command::new("tar")
        .arg("-czf")
        .arg(archive)
        .args(members)
        .current_dir(dir)
        .status()
        .await?;
    ensure_success("tar", status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn archive_contains_members_under_original_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("app-123_heapdump_2026-08-06-10-15.hprof"),
            "HPROF",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("app-123_threaddump_2026-08-06-10-15.txt"),
            "\"main\" #1 prio=5",
        )
        .unwrap();

        let archive = dir.path().join("app-123_dumps_2026-08-06-10-15.tar.gz");
        create_tar_gz(
            &archive,
            dir.path(),
            &[
                "app-123_heapdump_2026-08-06-10-15.hprof",
                "app-123_threaddump_2026-08-06-10-15.txt",
            ],
        )
        .await
        .unwrap();

        let listing = std::process::Command::new("tar")
            .arg("-tzf")
            .arg(&archive)
            .output()
            .unwrap();
        assert!(listing.status.success());
        let names: Vec<&str> = std::str::from_utf8(&listing.stdout)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(
            names,
            vec![
                "app-123_heapdump_2026-08-06-10-15.hprof",
                "app-123_threaddump_2026-08-06-10-15.txt",
            ]
        );
    }

    #[tokio::test]
    async fn missing_member_fails() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("out.tar.gz");
        let err = create_tar_gz(&archive, dir.path(), &["does-not-exist.hprof"])
            .await
            .unwrap_err();
        assert!(matches!(err, DumpError::CommandFailed { program, .. } if program == "tar"));
    }
}
