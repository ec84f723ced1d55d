//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::convert::ConvertOptions;
use crate::listing::ListOptions;

/// Webpbatch - Batch convert images to WebP, preserving folder structure
#[derive(Parser, Debug)]
#[command(name = "webpbatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file or folder
    #[arg(short, long, default_value = "./input")]
    pub input: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = "./output")]
    pub output: PathBuf,

    /// Target width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Target height in pixels.
    /// With only one of --width/--height given, the other side keeps the
    /// source aspect ratio.
    #[arg(long)]
    pub height: Option<u32>,

    /// WebP quality, 0-100
    #[arg(long, default_value = "60", value_parser = validate_quality)]
    pub quality: u8,

    /// Skip files that already have a counterpart in the output tree
    #[arg(long)]
    pub skip_existing: bool,

    /// Shell out to ffmpeg when the native decoder cannot handle a file
    #[arg(long)]
    pub ffmpeg_fallback: bool,
}

impl Cli {
    /// Bundle the conversion knobs for the pipeline.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            width: self.width,
            height: self.height,
            quality: self.quality,
            skip_existing: self.skip_existing,
            ffmpeg_fallback: self.ffmpeg_fallback,
        }
    }
}

/// List files under a folder and write the list to a JSON file
#[derive(Parser, Debug)]
#[command(name = "list-output")]
#[command(author, version, about, long_about = None)]
pub struct ListArgs {
    /// Root folder to list
    #[arg(short, long, default_value = "./output")]
    pub root: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = "./output_list.json")]
    pub out: PathBuf,

    /// Whether to walk recursively (true/false)
    #[arg(short = 'R', long, action = ArgAction::Set, default_value_t = true)]
    pub recursive: bool,

    /// Include directories in the list (default: files only)
    #[arg(short = 'd', long)]
    pub include_dirs: bool,

    /// Emit absolute paths instead of paths relative to the root
    #[arg(short = 'a', long)]
    pub absolute: bool,

    /// JSON indent level
    #[arg(long, default_value = "2")]
    pub indent: usize,
}

impl ListArgs {
    /// Bundle the listing knobs for the walker.
    pub fn options(&self) -> ListOptions {
        ListOptions {
            recursive: self.recursive,
            include_dirs: self.include_dirs,
            absolute: self.absolute,
        }
    }
}

/// Validator for the quality parameter
fn validate_quality(s: &str) -> Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid quality", s))?;

    if value > 100 {
        Err(format!("quality must be between 0 and 100, got {}", value))
    } else {
        Ok(value)
    }
}
