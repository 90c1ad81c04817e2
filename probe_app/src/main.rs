//! Geometry probe
//!
//! Loads a geometry configuration, installs it, and logs a handful of
//! predicate results so tolerance settings can be checked by eye.
//!
//! Usage: `geometry_probe [config.toml|config.ron]`

use rust_geometry::foundation::logging;
use rust_geometry::prelude::*;

fn load_config() -> Result<GeometryConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => GeometryConfig::load_from_file(&path),
        None => Ok(GeometryConfig::default()),
    }
}

fn probe_spheres_and_boxes() {
    let ball = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 2.0);
    let crate_box = Cuboid::new(Vec3::new(-1.0, 0.0, -1.0), 2.0, 2.0, 2.0);

    log::info!("{} vs {}", ball, crate_box);
    log::info!("  intersects: {}", ball.intersects(&crate_box));
    log::info!("  distance:   {:.4}", ball.distance_from(&crate_box));
    log::info!("  contains:   {}", crate_box.contains(&ball));
}

fn probe_rays() {
    let floor = Plane::new(directions::UP, 0.0);
    let shot = Ray::infinite(Vec3::new(-4.0, 4.0, 0.0), Vec3::new(1.0, -1.0, 0.0));

    log::info!("{} vs {}", shot, floor);
    match shot.intersection_with(&floor) {
        Some(hit) => log::info!("  hits at ({:.3}, {:.3}, {:.3})", hit.x, hit.y, hit.z),
        None => log::info!("  misses"),
    }
    log::info!("  incident angle: {:.4} rad", shot.incident_angle_with(&floor));
    if let Some(bounce) = shot.reflect(&floor) {
        log::info!("  reflects as {}", bounce);
    }

    let target = Sphere::new(Vec3::new(10.0, 3.0, 0.0), 1.5);
    if let Some(bounce) = shot.reflect(&floor) {
        log::info!("  bounce reaches {}: {}", target, bounce.intersects(&target));
    }
}

fn probe_planes() -> Result<(), GeometryError> {
    let wall = Plane::from_points(
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(5.0, 1.0, 0.0),
        Vec3::new(5.0, 0.0, 1.0),
    )?;
    let floor = Plane::new(directions::UP, 0.0);

    log::info!("{} vs {}", wall, floor);
    match wall.intersection_with(&floor) {
        Some(line) => log::info!(
            "  meet along ({:.3}, {:.3}, {:.3}) through ({:.3}, {:.3}, {:.3})",
            line.direction.x,
            line.direction.y,
            line.direction.z,
            line.point.x,
            line.point.y,
            line.point.z
        ),
        None => log::info!("  are parallel"),
    }

    if let Err(e) = Plane::from_points(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0)) {
        log::info!("Colinear points rejected: {}", e);
    }
    Ok(())
}

fn probe_upright_solids() {
    let tank = Cylinder::new(Vec3::zeros(), 3.0, 6.0);
    let funnel = Cone::frustum(Vec3::new(0.0, 3.0, 0.0), 1.0, 6.0, 3.0);

    log::info!("{} vs {}", tank, funnel);
    log::info!("  contains: {}", tank.contains(&funnel));
    log::info!("  same solid as frustum: {}", Cone::from(tank));
    log::info!("  volumes: {:.3} / {:.3}", tank.volume(), funnel.volume());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    if !logging::init_with_level(&config.logging.level) {
        eprintln!("A logger was already installed; keeping it");
    }

    log::info!("Starting geometry probe");
    config.install()?;
    log::info!("Epsilon: {}", rust_geometry::tolerance::epsilon());

    probe_spheres_and_boxes();
    probe_rays();
    probe_planes()?;
    probe_upright_solids();

    log::info!("Probe finished");
    Ok(())
}
