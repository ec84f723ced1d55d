//! Batch image conversion pipeline.
//!
//! Walks the input tree, converts every file it can to WebP while
//! preserving the folder structure, and optionally falls back to an ffmpeg
//! subprocess for formats outside the native decoder's reach.

mod error;
mod ffmpeg;

pub use error::ConvertError;
pub use ffmpeg::available as ffmpeg_available;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use image::imageops::FilterType;

use crate::report::BatchSummary;
use crate::utils::create_progress_bar;

/// Extensions the native decoder handles. Everything else needs the ffmpeg
/// fallback.
const NATIVE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// Knobs for a batch run, mirroring the converter's CLI flags.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: u8,
    pub skip_existing: bool,
    pub ffmpeg_fallback: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            quality: 60,
            skip_existing: false,
            ffmpeg_fallback: false,
        }
    }
}

/// Which converter produced a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Native,
    Ffmpeg,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Native => write!(f, "native"),
            Tool::Ffmpeg => write!(f, "ffmpeg"),
        }
    }
}

/// Per-file result of one conversion attempt.
#[derive(Debug)]
pub enum Outcome {
    Converted(Tool),
    Skipped(String),
    Failed(String),
}

/// Gather every regular file under `path`, or the file itself.
///
/// Directories are walked depth-first with entries sorted by name, so the
/// batch order is deterministic.
pub fn collect_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    walk(path, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Where `src` lands in the output tree: its path relative to the input
/// root (or just its file name for single-file input), with a `.webp`
/// extension.
pub fn destination(src: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let rel: PathBuf = if input_root.is_dir() {
        src.strip_prefix(input_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| src.to_path_buf())
    } else {
        src.file_name().map(PathBuf::from).unwrap_or_default()
    };
    output_root.join(rel).with_extension("webp")
}

/// Run the whole batch sequentially, printing a line per file under a
/// progress bar, and return the tally.
pub fn run_batch(
    input_root: &Path,
    output_root: &Path,
    sources: &[PathBuf],
    options: &ConvertOptions,
) -> BatchSummary {
    let started = Instant::now();
    let mut summary = BatchSummary::default();
    let bar = create_progress_bar(sources.len() as u64);

    for src in sources {
        let dst = destination(src, input_root, output_root);
        match process_file(src, &dst, options) {
            Outcome::Converted(tool) => {
                bar.println(format!(
                    "   {} {} {} {} {}",
                    style("✓").green(),
                    src.display(),
                    style("→").dim(),
                    dst.display(),
                    style(format!("({})", tool)).dim()
                ));
                summary.record_converted(tool);
            }
            Outcome::Skipped(reason) => {
                bar.println(format!(
                    "   {} {} {}",
                    style("−").yellow(),
                    src.display(),
                    style(format!("({})", reason)).dim()
                ));
                summary.record_skipped(src, &reason);
            }
            Outcome::Failed(reason) => {
                bar.println(format!(
                    "   {} {} {}",
                    style("✗").red(),
                    src.display(),
                    style(format!("({})", reason)).dim()
                ));
                summary.record_failed(src, &reason);
            }
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    summary.elapsed = started.elapsed();
    summary
}

/// Convert one file, choosing the native decoder or the ffmpeg fallback by
/// extension, and fold every error into the returned outcome.
pub fn process_file(src: &Path, dst: &Path, options: &ConvertOptions) -> Outcome {
    if let Some(parent) = dst.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            return Outcome::Failed(format!("cannot create {}: {}", parent.display(), err));
        }
    }
    if options.skip_existing && dst.exists() {
        return Outcome::Skipped("already exists".to_string());
    }

    let native_error = if has_native_extension(src) {
        match convert_native(src, dst, options) {
            Ok(()) => return Outcome::Converted(Tool::Native),
            Err(err) => Some(err),
        }
    } else {
        None
    };

    if options.ffmpeg_fallback {
        match ffmpeg::convert(src, dst, options.width, options.height, options.quality) {
            Ok(()) => Outcome::Converted(Tool::Ffmpeg),
            Err(err) => Outcome::Failed(err.to_string()),
        }
    } else if let Some(err) = native_error {
        Outcome::Failed(err.to_string())
    } else {
        Outcome::Skipped("unsupported format, ffmpeg fallback disabled".to_string())
    }
}

fn has_native_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| NATIVE_EXTENSIONS.contains(&ext.as_str()))
}

/// Decode, resize if requested, and encode as lossy WebP at the configured
/// quality. Animated sources are encoded from their first frame.
fn convert_native(src: &Path, dst: &Path, options: &ConvertOptions) -> Result<(), ConvertError> {
    let img = image::open(src)?;
    let img = match target_size(img.width(), img.height(), options.width, options.height) {
        Some((width, height)) => img.resize_exact(width, height, FilterType::Lanczos3),
        None => img,
    };

    let rgba = img.to_rgba8();
    let encoded =
        webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
            .encode(f32::from(options.quality));
    fs::write(dst, &*encoded)?;
    Ok(())
}

/// Final dimensions for the requested width/height. A single dimension
/// keeps the aspect ratio; `None` means no resize.
fn target_size(
    orig_width: u32,
    orig_height: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> Option<(u32, u32)> {
    match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        (Some(w), None) => {
            let h = (f64::from(w) / f64::from(orig_width) * f64::from(orig_height)) as u32;
            Some((w, h.max(1)))
        }
        (None, Some(h)) => {
            let w = (f64::from(h) / f64::from(orig_height) * f64::from(orig_width)) as u32;
            Some((w.max(1), h))
        }
        (None, None) => None,
    }
}
