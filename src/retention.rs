//! Retention sweep for the remote dump folder.
//!
//! Runs before every capture cycle: lists the Drive folder and deletes
//! archives older than [`MAX_AGE_HOURS`], reporting each decision.

use chrono::{DateTime, Duration, Local};
use console::Style;

use crate::drive::DriveClient;
use crate::error::DumpError;

/// Remote archives strictly older than this many hours are deleted.
pub const MAX_AGE_HOURS: i64 = 24;

/// Outcome counts of one retention sweep.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub deleted: usize,
    pub retained: usize,
}

/// Returns true when the file is strictly older than `max_age`.
pub fn is_expired(created: DateTime<Local>, now: DateTime<Local>, max_age: Duration) -> bool {
    now.signed_duration_since(created) > max_age
}

/// Parses a Drive `createdTime` (RFC 3339) into the local timezone.
pub fn parse_created_time(value: &str) -> Result<DateTime<Local>, DumpError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|source| DumpError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Lists the folder and deletes every file past the retention threshold.
/// Any API error aborts the sweep and the whole run with it.
pub async fn sweep(
    client: &DriveClient,
    folder_id: &str,
    now: DateTime<Local>,
) -> Result<SweepReport, DumpError> {
    let yellow = Style::new().yellow();
    let max_age = Duration::hours(MAX_AGE_HOURS);
    let mut report = SweepReport::default();

    for file in client.list_folder(folder_id).await? {
        let created = parse_created_time(&file.created_time)?;
        if is_expired(created, now, max_age) {
            client.delete_file(&file.id).await?;
            println!(
                "  {} Deleted expired file: {}",
                yellow.apply_to("−"),
                file.name
            );
            report.deleted += 1;
        } else {
            println!("  Retained: {}", file.name);
            report.retained += 1;
        }
    }

    Ok(report)
}
