//! tumble - headless host for the tumble 2D physics engine
//!
//! Loads configuration, builds demo scenes and steps them frame by frame.

pub mod config;
pub mod scene;
pub mod systems;
