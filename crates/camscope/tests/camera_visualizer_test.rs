//! Integration tests for the camera visualizer pipeline.

use std::fs::File;
use std::path::Path;

use camscope::*;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use serde_json::json;

/// Writes a camera dictionary with `n` cameras spread along +X.
fn write_cameras(path: &Path, n: usize) {
    let mut cameras = serde_json::Map::new();
    for i in 0..n {
        cameras.insert(
            format!("{i:06}.jpg"),
            json!({
                "K": [[500.0, 0.0, 320.0], [0.0, 500.0, 240.0], [0.0, 0.0, 1.0]],
                "C2W": [
                    [1.0, 0.0, 0.0, i as f64],
                    [0.0, 1.0, 0.0, 0.0],
                    [0.0, 0.0, 1.0, -3.0]
                ],
                "img_size": [480, 640]
            }),
        );
    }
    std::fs::write(path, serde_json::to_string_pretty(&cameras).unwrap()).unwrap();
}

const TETRA_PLY: &str = "ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 4
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
0 1 0
0 0 1
3 0 2 1
3 0 1 3
3 0 3 2
3 1 2 3
";

fn write_config(dir: &Path, geometry_kind: &str) -> std::path::PathBuf {
    write_cameras(&dir.join("train_cam.json"), 3);
    write_cameras(&dir.join("render_cam.json"), 5);
    std::fs::write(dir.join("meshed-poisson.ply"), TETRA_PLY).unwrap();

    let config = json!({
        "camera_groups": [
            { "color": [0.0, 1.0, 0.0], "cameras": "train_cam.json" },
            { "color": [0.0, 0.0, 1.0], "cameras": "render_cam.json" }
        ],
        "sphere_radius": 1.0,
        "camera_size": 0.1,
        "geometry": { "path": "meshed-poisson.ply", "kind": geometry_kind },
        "output": "out/scene.ply"
    });
    let path = dir.join("visualize.json");
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

#[test]
fn test_two_groups_with_mesh() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = CameraVisualizerConfig::from_file(write_config(dir.path(), "mesh")).unwrap();

    let scene = visualize_cameras(&config).unwrap();
    let names: Vec<&str> = scene.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["sphere", "coordinate frame", "cameras 0", "cameras 1", "geometry"]
    );

    let train = scene.entries()[2].geometry.as_line_set().unwrap();
    let render = scene.entries()[3].geometry.as_line_set().unwrap();
    assert_eq!(train.num_points(), 15);
    assert_eq!(render.num_points(), 25);
    assert_eq!(render.num_edges(), 40);

    // Apexes sit at the camera translations, in file order
    for i in 0..5 {
        assert_eq!(render.points()[5 * i], Vec3::new(i as f32, 0.0, -3.0));
    }

    match &scene.entries()[4].geometry {
        Geometry::TriangleMesh(mesh) => {
            assert_eq!(mesh.num_faces(), 4);
            assert_eq!(mesh.vertex_normals().len(), 4);
        }
        other => panic!("expected a mesh, got {}", other.kind()),
    }

    // The exported file holds every vertex and edge of the scene
    let ply = Parser::<DefaultElement>::new()
        .read_ply(&mut File::open(&config.output).unwrap())
        .unwrap();
    let sphere_edges = scene.entries()[0].geometry.as_line_set().unwrap().num_edges();
    let sphere_points = scene.entries()[0].geometry.as_line_set().unwrap().num_points();
    assert_eq!(ply.payload["vertex"].len(), sphere_points + 4 + 15 + 25 + 4);
    assert_eq!(ply.payload["edge"].len(), sphere_edges + 3 + 24 + 40);
    assert_eq!(ply.payload["face"].len(), 4);

    // First train-camera edge is green
    let first_camera_edge = &ply.payload["edge"][sphere_edges + 3];
    assert_eq!(first_camera_edge["green"], Property::UChar(255));
    assert_eq!(first_camera_edge["blue"], Property::UChar(0));
}

#[test]
fn test_point_cloud_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        CameraVisualizerConfig::from_file(write_config(dir.path(), "point cloud")).unwrap();

    let scene = visualize_cameras(&config).unwrap();
    match &scene.get("geometry").unwrap().geometry {
        Geometry::PointCloud(cloud) => assert_eq!(cloud.num_points(), 4),
        other => panic!("expected a point cloud, got {}", other.kind()),
    }
}

#[test]
fn test_unsupported_geometry_type_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = CameraVisualizerConfig::from_file(write_config(dir.path(), "voxel")).unwrap();

    assert!(matches!(
        visualize_cameras(&config),
        Err(CamscopeError::UnsupportedGeometryType(t)) if t == "voxel"
    ));
    assert!(!config.output.exists());
}

#[test]
fn test_missing_camera_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = CameraVisualizerConfig {
        camera_groups: vec![CameraGroupConfig {
            color: Vec3::Y,
            cameras: dir.path().join("absent.json"),
        }],
        sphere_radius: 1.0,
        camera_size: 0.1,
        geometry: None,
        output: dir.path().join("scene.ply"),
    };
    assert!(matches!(
        visualize_cameras(&config),
        Err(CamscopeError::FileNotFound(_))
    ));
}

#[test]
fn test_malformed_camera_file() {
    let dir = tempfile::tempdir().unwrap();
    let cameras = dir.path().join("cams.json");
    std::fs::write(&cameras, r#"{ "a.png": { "K": [[1, 0, 0]], "C2W": [], "img_size": [1, 1] } }"#)
        .unwrap();
    assert!(matches!(
        load_camera_dict(&cameras),
        Err(CamscopeError::JsonError(_))
    ));
}

#[test]
fn test_cameras_follow_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cams.json");
    std::fs::write(
        &path,
        r#"{
            "frame_b.png": {
                "K": [[100, 0, 50], [0, 100, 50], [0, 0, 1]],
                "C2W": [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0]],
                "img_size": [100, 100]
            },
            "frame_a.png": {
                "K": [[100, 0, 50], [0, 100, 50], [0, 0, 1]],
                "C2W": [[1, 0, 0, 9], [0, 1, 0, 0], [0, 0, 1, 0]],
                "img_size": [100, 100]
            }
        }"#,
    )
    .unwrap();

    let group = CameraGroup::new(Vec3::Y, load_camera_dict(&path).unwrap());
    let lines = group.line_set(0.1).unwrap();
    assert_eq!(lines.points()[0], Vec3::ZERO);
    assert_eq!(lines.points()[5], Vec3::new(9.0, 0.0, 0.0));
}

#[test]
fn test_empty_group_gives_empty_line_set() {
    let scene = assemble_scene(&[CameraGroup::new(Vec3::Y, CameraDict::new())], 2.0, 0.1, None)
        .unwrap();
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.entries()[2].geometry.as_line_set().unwrap().num_points(), 0);

    // Sphere radius is honored
    let (min, max) = scene.entries()[0].geometry.bounding_box().unwrap();
    assert!((max.z - 2.0).abs() < 1e-5 && (min.z + 2.0).abs() < 1e-5);
}
