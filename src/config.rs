//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TUMBLE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use tumble_math::Vec2;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsSection,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TUMBLE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TUMBLE_PHYSICS__TICKS_PER_SECOND=120 -> physics.ticks_per_second = 120
        figment = figment.merge(Env::prefixed("TUMBLE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSection {
    /// Fixed simulation ticks per second
    pub ticks_per_second: f32,
    /// Gravity [x, y] (positive y = down the screen)
    pub gravity: [f32; 2],
}

impl Default for PhysicsSection {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            gravity: [0.0, 0.0],
        }
    }
}

impl PhysicsSection {
    /// Convert to the engine's physics config
    pub fn to_physics_config(&self) -> tumble_physics::PhysicsConfig {
        tumble_physics::PhysicsConfig::new(self.ticks_per_second, Vec2::from(self.gravity))
    }
}

/// Which demo scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Spheres jostling in a shared all-group
    #[default]
    BallPit,
    /// Points falling onto fixed spheres through a one-way group
    PointRain,
    /// Moving spheres bouncing off fixed obstacles
    SphereSwarm,
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub kind: SceneKind,
    /// Seed for body placement
    pub seed: u64,
    /// Scene width in world units, centered on the origin
    pub width: f32,
    /// Scene height in world units, centered on the origin
    pub height: f32,
    /// Number of moving spheres
    pub sphere_count: usize,
    /// Number of fixed obstacle spheres
    pub obstacle_count: usize,
    /// Smallest sphere radius
    pub min_radius: f32,
    /// Largest sphere radius
    pub max_radius: f32,
    /// Speed given to moving spheres
    pub max_speed: f32,
    /// Points spawned per second (point rain only)
    pub points_per_second: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            kind: SceneKind::BallPit,
            seed: 0,
            width: 40.0,
            height: 30.0,
            sphere_count: 40,
            obstacle_count: 8,
            min_radius: 0.5,
            max_radius: 2.0,
            max_speed: 5.0,
            points_per_second: 30.0,
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frames to run before exiting
    pub frames: u32,
    /// Frame delta fed to the world each frame, in seconds
    pub frame_dt: f32,
    /// Largest delta the world may be stepped by in one frame
    pub max_frame_dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_dt: 1.0 / 60.0,
            max_frame_dt: 0.25,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log a world summary every this many frames (0 = never)
    pub report_every: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_every: 60,
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);
