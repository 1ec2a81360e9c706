//! Integration tests for the depth inspector pipeline.

use std::path::Path;

use camscope::*;
use image::{ImageBuffer, Luma};

fn write_depth_png(path: &Path, width: u32, height: u32, values: Vec<u16>) {
    ImageBuffer::<Luma<u16>, _>::from_raw(width, height, values)
        .unwrap()
        .save(path)
        .unwrap();
}

#[test]
fn test_inspect_small_depth_png() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("frame-000020.depth.png");
    write_depth_png(&png, 2, 2, vec![0, 100, 50, 100]);

    let mut config = DepthInspectorConfig::new(&png);
    config.output = Some(dir.path().join("out/depth_jet.png"));

    let report = inspect_depth(&config).unwrap();
    assert_eq!(report.png.max, 100);
    assert_eq!(report.png.min, 0);
    assert!((report.png.mean - 62.5).abs() < 1e-12);
    assert!(report.raw.is_none());

    // Inverted gray [[255, 0], [127, 0]] through jet
    let jet = ColorMapRegistry::new().get("jet").unwrap().lookup_table();
    assert_eq!(report.image.get_pixel(0, 0).0, jet[255]);
    assert_eq!(report.image.get_pixel(1, 0).0, jet[0]);
    assert_eq!(report.image.get_pixel(0, 1).0, jet[127]);
    assert_eq!(report.image.get_pixel(1, 1).0, jet[0]);

    let saved = image::open(config.output.as_ref().unwrap()).unwrap().to_rgb8();
    assert_eq!(saved, report.image);
}

#[test]
fn test_inspect_with_raw_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("depth.png");
    write_depth_png(&png, 3, 1, vec![1000, 2000, 3000]);

    let raw = dir.path().join("depth1.raw");
    let samples: [u16; 6] = [10, 20, 30, 40, 50, 600];
    let bytes: Vec<u8> = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(&raw, bytes).unwrap();

    let mut config = DepthInspectorConfig::new(&png);
    config.raw_depth = Some(RawDepthConfig {
        path: raw,
        shape: Some([2, 3]),
    });

    let report = inspect_depth(&config).unwrap();
    let raw_stats = report.raw.unwrap();
    assert_eq!((raw_stats.height, raw_stats.width), (2, 3));
    assert_eq!(raw_stats.max, 600);
    assert_eq!(raw_stats.min, 10);
    assert!((raw_stats.mean - 125.0).abs() < 1e-12);
    assert_eq!(report.png.max, 3000);
}

#[test]
fn test_config_file_drives_inspector() {
    let dir = tempfile::tempdir().unwrap();
    write_depth_png(&dir.path().join("d.png"), 2, 1, vec![7, 14]);
    let config_path = dir.path().join("depth.json");
    std::fs::write(
        &config_path,
        r#"{ "depth_png": "d.png", "colormap": "gray", "output": "gray.png" }"#,
    )
    .unwrap();

    let config = DepthInspectorConfig::from_file(&config_path).unwrap();
    let report = inspect_depth(&config).unwrap();
    // 7 / 14 * 255 = 127.5 -> 128, inverted 127
    assert_eq!(report.image.get_pixel(0, 0).0, [127, 127, 127]);
    assert_eq!(report.image.get_pixel(1, 0).0, [0, 0, 0]);
    assert!(dir.path().join("gray.png").exists());
}

#[test]
fn test_all_zero_depth_is_domain_error() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("zeros.png");
    write_depth_png(&png, 2, 2, vec![0; 4]);

    let mut config = DepthInspectorConfig::new(&png);
    config.output = Some(dir.path().join("never.png"));
    assert!(matches!(inspect_depth(&config), Err(CamscopeError::Domain(_))));
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn test_inspector_errors() {
    let missing = DepthInspectorConfig::new("/no/such/depth.png");
    assert!(matches!(
        inspect_depth(&missing),
        Err(CamscopeError::FileNotFound(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("d.png");
    write_depth_png(&png, 1, 1, vec![5]);
    let mut config = DepthInspectorConfig::new(&png);
    config.colormap = "nope".to_string();
    assert!(matches!(
        inspect_depth(&config),
        Err(CamscopeError::ColorMapNotFound(_))
    ));
}
