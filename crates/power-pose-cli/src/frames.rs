//! Recorded frame input.
//!
//! A recording is either a JSON array of frames or JSON lines with one frame
//! per line. Each frame lists the landmarks the detector reported:
//!
//! ```json
//! { "frame": 12, "landmarks": [ { "type": "left_shoulder", "x": 310.5, "y": 220.0, "confidence": 0.98 } ] }
//! ```
//!
//! `frame` is optional and defaults to the position in the recording.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use power_pose_core::{Landmark, Pose};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One frame as stored in a recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame number reported by the capture pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<u64>,
    /// Landmarks detected in the frame
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

/// A frame ready for classification.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame number
    pub index: u64,
    /// Detected pose
    pub pose: Pose,
}

impl FrameRecord {
    /// Builds the pose for this frame, keeping the last of any duplicated
    /// landmark identity.
    pub fn into_frame(self, position: u64) -> Frame {
        let index = self.frame.unwrap_or(position);
        let mut pose = Pose::new();
        for landmark in self.landmarks {
            if let Some(previous) = pose.insert(landmark) {
                warn!(
                    frame = index,
                    landmark = %previous.landmark_type,
                    "duplicate landmark in frame, keeping the last one"
                );
            }
        }
        Frame { index, pose }
    }
}

/// Parses a recording from a string.
///
/// Input starting with `[` is read as a JSON array; anything else as JSON
/// lines, skipping blank lines.
pub fn parse_frames(contents: &str) -> Result<Vec<Frame>> {
    let records: Vec<FrameRecord> = if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents).context("Invalid JSON array of frames")?
    } else {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line).with_context(|| format!("Invalid frame on line {}", n + 1))
            })
            .collect::<Result<_>>()?
    };

    let frames: Vec<Frame> = records
        .into_iter()
        .zip(0u64..)
        .map(|(record, position)| record.into_frame(position))
        .collect();
    debug!(count = frames.len(), "parsed frames");
    Ok(frames)
}

/// Loads a recording from a file, or from stdin when the path is `-`.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read frames from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read frames from {}", path.display()))?
    };
    parse_frames(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use power_pose_core::LandmarkType;

    #[test]
    fn test_parse_json_lines() {
        let input = r#"{"frame": 7, "landmarks": [{"type": "nose", "x": 1.0, "y": 2.0, "confidence": 0.5}]}

{"landmarks": []}
"#;
        let frames = parse_frames(input).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].index, 7);
        assert!(frames[0].pose.contains(LandmarkType::Nose));
        assert_eq!(frames[1].index, 1);
        assert!(frames[1].pose.is_empty());
    }

    #[test]
    fn test_parse_json_array() {
        let input = r#"[{"landmarks": [{"type": "left_hip", "x": 0, "y": 0, "confidence": 1.0}]}, {}]"#;
        let frames = parse_frames(input).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].pose.len(), 1);
        assert!(frames[1].pose.is_empty());
    }

    #[test]
    fn test_rejects_bad_confidence() {
        let input = r#"{"landmarks": [{"type": "nose", "x": 1.0, "y": 2.0, "confidence": 1.5}]}"#;
        let err = parse_frames(input).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"));
    }

    #[test]
    fn test_rejects_unknown_landmark() {
        let input = r#"{"landmarks": [{"type": "tail", "x": 1.0, "y": 2.0, "confidence": 0.5}]}"#;
        assert!(parse_frames(input).is_err());
    }

    #[test]
    fn test_duplicate_landmark_keeps_last() {
        let input = r#"{"landmarks": [
            {"type": "nose", "x": 1.0, "y": 1.0, "confidence": 0.5},
            {"type": "nose", "x": 9.0, "y": 9.0, "confidence": 0.5}
        ]}"#;
        // Multi-line objects are only valid inside an array.
        let frames = parse_frames(&format!("[{input}]")).unwrap();
        let nose = frames[0].pose.get(LandmarkType::Nose).unwrap();
        assert_eq!(nose.position.x, 9.0);
    }
}
