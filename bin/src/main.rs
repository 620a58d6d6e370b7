#[macro_use]
extern crate log;

use accelerators::*;
use core::app::*;

mod probe;
mod scenes;

use probe::*;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let kind = AcceleratorKind::from(OPTIONS.accelerator.as_str());
    let (width, height) = OPTIONS.resolution();

    let scene = scenes::generate(&OPTIONS.scene, OPTIONS.triangles, OPTIONS.seed)?;
    let camera = Camera::framing(&scene)?;

    let stats = trace(&scene, kind, &camera, width, height);
    if !OPTIONS.quiet {
        println!(
            "{kind}: {} scene, {width}x{height} rays, {} hits, {} in shadow, built in {:.3?}, traced in {:.3?}",
            OPTIONS.scene, stats.hits, stats.occluded, stats.build_time, stats.trace_time
        );
    }

    if OPTIONS.verify {
        let checked = verify(&scene, &camera.rays(width, height))?;
        if !OPTIONS.quiet {
            println!("Verified {checked} rays against the linear scan.");
        }
    }

    Ok(())
}
