//! Tests for the batch conversion pipeline

mod common;

use std::fs;

use tempfile::TempDir;

use webpbatch::convert::{self, ConvertOptions};

#[test]
fn converts_single_file_into_output_root() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("photo.png");
    common::write_png(&src, 6, 4);
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let sources = convert::collect_sources(&src).unwrap();
    assert_eq!(sources, vec![src.clone()]);

    let summary = convert::run_batch(&src, &out, &sources, &ConvertOptions::default());
    assert_eq!(summary.converted(), 1);
    assert!(summary.skipped.is_empty());
    assert!(summary.failed.is_empty());

    let dst = out.join("photo.webp");
    assert!(dst.exists(), "WebP file should be created at {:?}", dst);

    let decoded = image::open(&dst).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (6, 4));
}

#[test]
fn preserves_folder_structure() {
    let (tmp, input) = common::create_input_tree();
    let out = tmp.path().join("out");

    let sources = convert::collect_sources(&input).unwrap();
    assert_eq!(sources.len(), 2);

    let summary = convert::run_batch(&input, &out, &sources, &ConvertOptions::default());
    assert_eq!(summary.converted(), 2);

    assert!(out.join("a.webp").exists());
    assert!(out.join("nested").join("b.webp").exists());
}

#[test]
fn collect_sources_is_sorted_and_recursive() {
    let (_tmp, input) = common::create_input_tree();

    let sources = convert::collect_sources(&input).unwrap();
    let names: Vec<String> = sources
        .iter()
        .map(|p| p.strip_prefix(&input).unwrap().display().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "a.png".to_string(),
            format!("nested{}b.png", std::path::MAIN_SEPARATOR),
        ]
    );
}

#[test]
fn resizes_with_aspect_ratio_for_width_only() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("wide.png");
    common::write_png(&src, 8, 4);
    let out = tmp.path().join("out");

    let options = ConvertOptions {
        width: Some(4),
        ..ConvertOptions::default()
    };
    let sources = convert::collect_sources(&src).unwrap();
    convert::run_batch(&src, &out, &sources, &options);

    let decoded = image::open(out.join("wide.webp")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (4, 2));
}

#[test]
fn resizes_exactly_when_both_dimensions_given() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("wide.png");
    common::write_png(&src, 8, 4);
    let out = tmp.path().join("out");

    let options = ConvertOptions {
        width: Some(3),
        height: Some(3),
        ..ConvertOptions::default()
    };
    let sources = convert::collect_sources(&src).unwrap();
    convert::run_batch(&src, &out, &sources, &options);

    let decoded = image::open(out.join("wide.webp")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (3, 3));
}

#[test]
fn skip_existing_leaves_destination_untouched() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("photo.png");
    common::write_png(&src, 4, 4);
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    let dst = out.join("photo.webp");
    fs::write(&dst, b"sentinel").unwrap();

    let options = ConvertOptions {
        skip_existing: true,
        ..ConvertOptions::default()
    };
    let sources = convert::collect_sources(&src).unwrap();
    let summary = convert::run_batch(&src, &out, &sources, &options);

    assert_eq!(summary.converted(), 0);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(fs::read(&dst).unwrap(), b"sentinel");
}

#[test]
fn reconverts_existing_destination_by_default() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("photo.png");
    common::write_png(&src, 4, 4);
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    let dst = out.join("photo.webp");
    fs::write(&dst, b"sentinel").unwrap();

    let sources = convert::collect_sources(&src).unwrap();
    let summary = convert::run_batch(&src, &out, &sources, &ConvertOptions::default());

    assert_eq!(summary.converted(), 1);
    assert_ne!(fs::read(&dst).unwrap(), b"sentinel");
}

#[test]
fn unsupported_extension_without_fallback_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("notes.txt"), "not an image").unwrap();
    let out = tmp.path().join("out");

    let sources = convert::collect_sources(&input).unwrap();
    let summary = convert::run_batch(&input, &out, &sources, &ConvertOptions::default());

    assert_eq!(summary.converted(), 0);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.failed.is_empty());
    assert!(!out.join("notes.webp").exists());
}

#[test]
fn undecodable_supported_file_is_a_failure() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("broken.png"), b"definitely not a png").unwrap();
    let out = tmp.path().join("out");

    let sources = convert::collect_sources(&input).unwrap();
    let summary = convert::run_batch(&input, &out, &sources, &ConvertOptions::default());

    assert_eq!(summary.converted(), 0);
    assert_eq!(summary.failed.len(), 1);
}

#[test]
fn mixed_tree_tallies_every_outcome() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    common::write_png(&input.join("good.png"), 4, 4);
    fs::write(input.join("notes.txt"), "not an image").unwrap();
    fs::write(input.join("broken.jpg"), b"garbage").unwrap();
    let out = tmp.path().join("out");

    let sources = convert::collect_sources(&input).unwrap();
    let summary = convert::run_batch(&input, &out, &sources, &ConvertOptions::default());

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.converted(), 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(out.join("good.webp").exists());
}
