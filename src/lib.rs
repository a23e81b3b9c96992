//! Wizbub
//!
//! A desktop game built on winit. The launcher builds the fixed window
//! configuration and hands it, with the game object, to the runtime.

/// Engine runtime - windowing, icons, and lifecycle callbacks
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Layered runtime settings
pub mod config;

/// The game object
pub mod game;

/// Startup diagnostics
pub mod health;

/// Desktop launcher
pub mod launcher;

pub mod logging;

/// DawnLike tile index generation
pub mod tiles;
