//! tumble - runs a 2D physics scene headless and reports on it

use tumble::config::{AppConfig, SceneKind};
use tumble::scene::{PointEmitter, SceneBounds, SceneBuilder};
use tumble::systems::SimulationSystem;
use tumble_math::Vec2;
use tumble_physics::{PhysicsError, PhysicsWorld};

/// Seed offset so the emitter does not replay the scene's placement stream
const EMITTER_SEED_OFFSET: u64 = 1;

fn build_world(config: &AppConfig, bounds: SceneBounds) -> Result<PhysicsWorld, PhysicsError> {
    let scene = &config.scene;
    let builder = SceneBuilder::new(scene.seed, bounds)
        .with_physics(config.physics.to_physics_config())?;

    let builder = match scene.kind {
        SceneKind::BallPit => builder.add_ball_pit(
            scene.sphere_count,
            scene.min_radius,
            scene.max_radius,
            scene.max_speed,
        )?,
        SceneKind::PointRain => {
            builder.add_fixed_spheres(scene.obstacle_count, scene.min_radius, scene.max_radius)?
        }
        SceneKind::SphereSwarm => builder
            .add_fixed_spheres(scene.obstacle_count, scene.min_radius, scene.max_radius)?
            .add_swarm(
                scene.sphere_count,
                scene.min_radius,
                scene.max_radius,
                scene.max_speed,
            )?,
    };

    Ok(builder.build())
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting tumble with scene {:?}", config.scene.kind);

    let bounds = SceneBounds::new(config.scene.width, config.scene.height);
    let mut world = match build_world(&config, bounds) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded scene with {} bodies", world.len());

    let mut emitter = (config.scene.kind == SceneKind::PointRain).then(|| {
        PointEmitter::new(
            config.scene.points_per_second,
            bounds,
            config.scene.seed.wrapping_add(EMITTER_SEED_OFFSET),
        )
        .with_velocity(Vec2::new(0.0, config.scene.max_speed))
    });

    let mut simulation = SimulationSystem::with_max_frame_dt(config.simulation.max_frame_dt);
    let dt = config.simulation.frame_dt;
    let report_every = config.debug.report_every;

    for frame in 1..=config.simulation.frames {
        if let Some(emitter) = emitter.as_mut() {
            emitter.emit(&mut world, dt);
            emitter.cull(&mut world);
        } else {
            bounds.bounce_all(&mut world);
        }

        if simulation.update(&mut world, dt).is_err() {
            break;
        }

        if report_every > 0 && frame % report_every == 0 {
            log::info!(
                "Frame {}: {} bodies, {} ticks, {} intersecting pairs",
                frame,
                world.len(),
                world.tick(),
                world.gc_heavy_check_all_intersections().len()
            );
        }
    }

    match simulation.error() {
        Some(e) => {
            log::error!("Simulation stopped early: {}", e);
            std::process::exit(1);
        }
        None => log::info!(
            "Finished {} frames: {} bodies, {} ticks",
            config.simulation.frames,
            world.len(),
            world.tick()
        ),
    }
}
