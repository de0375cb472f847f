//! Target Pose Table Reader
//!
//! The table is comma-separated text: one header row, then one row per
//! sample with columns `timestamp, lateral, longitudinal, vertical, yaw,
//! pitch, roll`.

use crate::{PoseFeedError, PoseSample, Trajectory};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the target pose table inside a run directory
pub const TARGET_POSE_FILE: &str = "targetpose.csv";

const COLUMN_COUNT: usize = 7;

/// Location of a run: `<root>/<scenario>/<NN>/targetpose.csv`
pub fn target_pose_path(root: impl AsRef<Path>, scenario: &str, sequence: u32) -> PathBuf {
    root.as_ref()
        .join(scenario)
        .join(format!("{:02}", sequence))
        .join(TARGET_POSE_FILE)
}

/// Read a target pose table from disk
pub fn read_target_pose(path: impl AsRef<Path>) -> Result<Trajectory, PoseFeedError> {
    let path = path.as_ref();
    debug!("Reading target pose table {}", path.display());
    let file = File::open(path)?;
    parse_target_pose(BufReader::new(file))
}

/// Parse a target pose table from any buffered source
pub fn parse_target_pose<R: BufRead>(reader: R) -> Result<Trajectory, PoseFeedError> {
    let mut samples = Vec::new();

    // Header row is skipped unconditionally
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        samples.push(parse_row(trimmed, index + 1)?);
    }

    debug!("Parsed {} pose samples", samples.len());
    Trajectory::new(samples)
}

fn parse_row(row: &str, line: usize) -> Result<PoseSample, PoseFeedError> {
    let values = row
        .split(',')
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .map_err(|e| PoseFeedError::MalformedRow {
                    line,
                    reason: format!("'{}': {}", cell.trim(), e),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if values.len() != COLUMN_COUNT {
        return Err(PoseFeedError::MalformedRow {
            line,
            reason: format!("expected {} columns, got {}", COLUMN_COUNT, values.len()),
        });
    }

    Ok(PoseSample {
        timestamp: values[0],
        lateral_position: values[1],
        longitudinal_position: values[2],
        vertical_offset: values[3],
        yaw: values[4],
        pitch: values[5],
        roll: values[6],
    })
}
