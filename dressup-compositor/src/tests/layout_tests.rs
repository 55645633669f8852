use std::path::PathBuf;

use dressup_core::Size;
use image::Rgba;

use crate::ComposeError;
use crate::layout::{StageLayout, parse_hex_color};

#[test]
fn defaults_match_original_window() {
    let layout = StageLayout::default();
    assert_eq!(layout.stage_size(), Size::new(830, 700));
    assert_eq!(layout.thumbnail_size(), Size::new(75, 150));
    assert_eq!(layout.background_color().unwrap(), Rgba([32, 178, 170, 255]));
    assert_eq!(layout.paths.assets, PathBuf::from("assets"));
    assert_eq!(layout.paths.screenshots, PathBuf::from("screenshots"));
    assert!(layout.validate().is_ok());
}

#[test]
fn partial_file_fills_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("stage-layout.yaml");
    std::fs::write(&path, "thumbnail:\n  width: 100\n  height: 100\n").unwrap();

    let layout = StageLayout::load_from(&path).unwrap();
    assert_eq!(layout.thumbnail_size(), Size::new(100, 100));
    assert_eq!(layout.stage_size(), Size::new(830, 700));
}

#[test]
fn save_creates_parent_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("stage-layout.yaml");
    let mut layout = StageLayout::default();
    layout.stage.background = "#000000".to_string();

    layout.save_to(&path).unwrap();
    let loaded = StageLayout::load_from(&path).unwrap();
    assert_eq!(loaded, layout);
}

#[test]
fn rejects_empty_stage() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("stage-layout.yaml");
    std::fs::write(&path, "stage:\n  width: 0\n  height: 700\n  background: '#20B2AA'\n")
        .unwrap();

    let err = StageLayout::load_from(&path).unwrap_err();
    assert!(matches!(err, ComposeError::InvalidLayout(_)));
}

#[test]
fn rejects_bad_background() {
    let mut layout = StageLayout::default();
    layout.stage.background = "teal".to_string();
    assert!(matches!(
        layout.validate(),
        Err(ComposeError::InvalidLayout(_))
    ));
}

#[test]
fn hex_color_parsing() {
    assert_eq!(parse_hex_color("#FF8000"), Some(Rgba([255, 128, 0, 255])));
    assert_eq!(parse_hex_color("20b2aa"), Some(Rgba([32, 178, 170, 255])));
    assert_eq!(parse_hex_color("#FFF"), None);
    assert_eq!(parse_hex_color("#GG0000"), None);
    assert_eq!(parse_hex_color("#20B2AAFF"), None);
}
