//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Write a small solid-color PNG at `path` with the given dimensions,
/// creating parent directories as needed.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = RgbImage::from_pixel(width, height, Rgb([180, 40, 90]));
    img.save(path).unwrap();
}

/// Create a temp dir holding an input tree with a nested PNG file:
///
/// ```text
/// input/a.png
/// input/nested/b.png
/// ```
pub fn create_input_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("input");
    write_png(&root.join("a.png"), 4, 4);
    write_png(&root.join("nested").join("b.png"), 4, 4);
    (temp, root)
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
