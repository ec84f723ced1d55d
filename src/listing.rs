//! Directory listings exported as JSON arrays of path strings.
//!
//! Paths are rendered POSIX-style (forward slashes) on every platform and
//! are relative to the listed root unless absolute paths are requested.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

/// Knobs for a listing run, mirroring the lister's CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub recursive: bool,
    pub include_dirs: bool,
    pub absolute: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            include_dirs: false,
            absolute: false,
        }
    }
}

/// List files (and optionally directories) under `root`.
///
/// Entries are sorted per directory; the root itself is never listed, and
/// entries whose metadata cannot be read are skipped.
pub fn list_entries(root: &Path, options: ListOptions) -> Result<Vec<String>> {
    if !root.exists() {
        bail!("root path does not exist: {}", root.display());
    }

    let mut results = Vec::new();
    collect(root, root, options, &mut results)?;
    Ok(results)
}

fn collect(root: &Path, dir: &Path, options: ListOptions, results: &mut Vec<String>) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    for path in entries {
        let Ok(metadata) = path.metadata() else {
            continue;
        };
        if metadata.is_dir() {
            if options.include_dirs {
                results.push(render(root, &path, options)?);
            }
            if options.recursive {
                collect(root, &path, options, results)?;
            }
        } else {
            results.push(render(root, &path, options)?);
        }
    }
    Ok(())
}

fn render(root: &Path, path: &Path, options: ListOptions) -> Result<String> {
    if options.absolute {
        let resolved = path
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", path.display()))?;
        Ok(as_posix(&resolved))
    } else {
        let rel = path.strip_prefix(root).unwrap_or(path);
        Ok(as_posix(rel))
    }
}

/// Join path components with forward slashes regardless of platform.
fn as_posix(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Write `entries` to `out` as a JSON array with the given indent width,
/// overwriting any existing file and creating missing parent directories.
pub fn write_json_list(entries: &[String], out: &Path, indent: usize) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let file =
        File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut writer = BufWriter::new(file);

    let pad = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    entries
        .serialize(&mut serializer)
        .context("failed to encode listing as JSON")?;
    writer.flush().context("failed to flush listing file")?;
    Ok(())
}
