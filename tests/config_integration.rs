//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tumble::config::{AppConfig, SceneKind};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tumble-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_loads() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.physics.ticks_per_second, 60.0);
    assert_eq!(config.scene.kind, SceneKind::BallPit);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TUMBLE_SCENE__KIND", "sphere_swarm");
    std::env::set_var("TUMBLE_PHYSICS__TICKS_PER_SECOND", "120");
    let config = AppConfig::load();
    std::env::remove_var("TUMBLE_SCENE__KIND");
    std::env::remove_var("TUMBLE_PHYSICS__TICKS_PER_SECOND");

    let config = config.unwrap();
    assert_eq!(config.scene.kind, SceneKind::SphereSwarm);
    assert_eq!(config.physics.ticks_per_second, 120.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[physics]\nticks_per_second = 30.0\ngravity = [0.0, 9.8]\n",
    )
    .unwrap();
    fs::write(
        dir.join("user.toml"),
        "[physics]\nticks_per_second = 90.0\ngravity = [1.0, 0.0]\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.physics.ticks_per_second, 90.0);
    assert_eq!(config.physics.gravity, [1.0, 0.0]);
    // Sections missing from both files fall back to defaults
    assert_eq!(config.simulation.max_frame_dt, 0.25);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    let dir = scratch_dir("bad");
    fs::write(dir.join("default.toml"), "[scene]\nkind = \"volcano\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
