//! Camera visualizer demo.
//!
//! Builds view frustums for every camera of every configured group, adds a
//! reference sphere, a coordinate frame and an optional mesh or point cloud,
//! and exports the scene as a colored PLY file.
//!
//! Usage:
//!   cargo run --example camera_visualizer -- visualize.json
//!
//! Example config:
//!
//! ```json
//! {
//!   "camera_groups": [
//!     { "color": [0, 1, 0], "cameras": "office_cam/train_cam.json" },
//!     { "color": [0, 0, 1], "cameras": "office_cam/render_cam.json" }
//!   ],
//!   "sphere_radius": 1.0,
//!   "camera_size": 0.1,
//!   "geometry": { "path": "office_cam/meshed-poisson.ply", "kind": "mesh" },
//!   "output": "office_cam/cameras.ply"
//! }
//! ```

use std::process::ExitCode;

use camscope::{visualize_cameras, CameraVisualizerConfig};

fn run(config_path: &str) -> camscope::Result<()> {
    let config = CameraVisualizerConfig::from_file(config_path)?;
    let scene = visualize_cameras(&config)?;

    for entry in scene.iter() {
        println!("{:>18}  {}", entry.name, entry.geometry.kind());
    }
    if let Some((min, max)) = scene.bounding_box() {
        println!("scene bounds: {min} .. {max}");
    }
    println!("scene written to {}", config.output.display());
    Ok(())
}

fn main() -> ExitCode {
    camscope::init_logging();
    let Some(config_path) = std::env::args().nth(1) else {
        eprintln!("usage: camera_visualizer <config.json>");
        return ExitCode::FAILURE;
    };
    match run(&config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
