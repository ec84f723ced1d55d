//! ffmpeg fallback for formats the native decoder cannot read.

use std::path::Path;
use std::process::{Command, Stdio};

use super::error::ConvertError;

/// Check whether ffmpeg can be spawned at all.
pub fn available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Convert `src` to `dst` by shelling out to ffmpeg, discarding its output.
pub fn convert(
    src: &Path,
    dst: &Path,
    width: Option<u32>,
    height: Option<u32>,
    quality: u8,
) -> Result<(), ConvertError> {
    if !available() {
        return Err(ConvertError::FfmpegMissing);
    }

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-y").arg("-i").arg(src);
    if let Some(filter) = scale_filter(width, height) {
        cmd.arg("-vf").arg(filter);
    }
    cmd.arg("-quality").arg(quality.to_string()).arg(dst);

    let status = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(ConvertError::FfmpegFailed { status })
    }
}

/// Scale filter for the requested dimensions; `-1` lets ffmpeg keep the
/// aspect ratio for the unspecified side.
fn scale_filter(width: Option<u32>, height: Option<u32>) -> Option<String> {
    match (width, height) {
        (Some(w), Some(h)) => Some(format!("scale={}:{}", w, h)),
        (Some(w), None) => Some(format!("scale={}:-1", w)),
        (None, Some(h)) => Some(format!("scale=-1:{}", h)),
        (None, None) => None,
    }
}
