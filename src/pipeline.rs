use anyhow::Result;
use chrono::{DateTime, Local};

use crate::archive;
use crate::config::Config;
use crate::drive::DriveClient;
use crate::kube::PodTarget;
use crate::retention;
use crate::ui::StepProgress;

/// Intermediate heap dump path inside the pod, removed after the copy.
const REMOTE_HEAP_PATH: &str = "/tmp/heapdump";

/// Drives one dump-and-upload cycle from retention sweep to local cleanup.
pub struct DumpPipeline {
    pub config: Config,
    pub drive: DriveClient,
    pub target: PodTarget,
}

/// Minute-granularity timestamp embedded in every artifact name.
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d-%H-%M").to_string()
}

pub fn heap_dump_name(pod: &str, ts: &str) -> String {
    format!("{pod}_heapdump_{ts}.hprof")
}

pub fn thread_dump_name(pod: &str, ts: &str) -> String {
    format!("{pod}_threaddump_{ts}.txt")
}

pub fn archive_name(pod: &str, ts: &str) -> String {
    format!("{pod}_dumps_{ts}.tar.gz")
}

/// Direct-download link for an uploaded Drive object.
pub fn download_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

impl DumpPipeline {
    /// Runs the full cycle, returning the download link of the uploaded
    /// archive.
    ///
    /// Execution is a single forward pass: any failing step aborts the run
    /// and leaves earlier side effects in place (files already deleted by
    /// the sweep stay deleted). Local cleanup only happens after a
    /// successful upload.
    pub async fn run(&self) -> Result<String> {
        let progress = StepProgress::start("Sweeping remote dump folder");
        let report =
            retention::sweep(&self.drive, &self.config.folder_id, Local::now()).await?;
        progress.done(&format!(
            "Retention sweep: {} deleted, {} retained",
            report.deleted, report.retained
        ));

        tokio::fs::create_dir_all(&self.config.output_dir).await?;

        let ts = timestamp(Local::now());
        let heap_name = heap_dump_name(self.target.pod(), &ts);
        let thread_name = thread_dump_name(self.target.pod(), &ts);
        let heap_file = self.config.output_dir.join(&heap_name);
        let thread_file = self.config.output_dir.join(&thread_name);

        let progress = StepProgress::start("Capturing heap dump");
        let dump_arg = format!("-dump:format=b,file={REMOTE_HEAP_PATH}");
        self.target.exec(&["jmap", &dump_arg, "1"]).await?;
        self.target.copy_from(REMOTE_HEAP_PATH, &heap_file).await?;
        progress.done("Heap dump captured");

        let progress = StepProgress::start("Capturing thread dump");
        let stacks = self.target.exec_capture(&["jstack", "1"]).await?;
        tokio::fs::write(&thread_file, stacks).await?;
        progress.done("Thread dump captured");

        let progress = StepProgress::start("Removing heap dump from pod");
        self.target.exec(&["rm", REMOTE_HEAP_PATH]).await?;
        progress.done("Pod cleaned up");

        let name = archive_name(self.target.pod(), &ts);
        let archive_file = self.config.output_dir.join(&name);
        let progress = StepProgress::start("Compressing dumps");
        archive::create_tar_gz(
            &archive_file,
            &self.config.output_dir,
            &[&heap_name, &thread_name],
        )
        .await?;
        progress.done("Compression completed");

        let progress = StepProgress::start("Uploading archive to Drive");
        let file_id = self
            .drive
            .upload_file(&archive_file, &name, &self.config.folder_id)
            .await?;
        progress.done("Upload completed");

        for path in [&heap_file, &thread_file, &archive_file] {
            tokio::fs::remove_file(path).await?;
        }

        Ok(download_link(&file_id))
    }
}
