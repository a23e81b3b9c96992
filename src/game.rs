//! The Wizbub game object

use tracing::{debug, info};

use crate::app::ApplicationListener;

/// Root game object handed to the runtime
///
/// Tracks frame timing and viewport state across lifecycle callbacks.
#[derive(Debug, Default)]
pub struct WizbubGame {
    created: bool,
    disposed: bool,
    paused: bool,
    /// Total number of frames rendered
    frame_count: u64,
    /// Total time spent rendering, in seconds
    elapsed: f64,
    viewport: (u32, u32),
}

impl WizbubGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds of rendered time since creation
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current drawable size in physical pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

impl ApplicationListener for WizbubGame {
    fn name(&self) -> &str {
        "wizbub"
    }

    fn create(&mut self) {
        info!("Wizbub created");
        self.created = true;
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "Viewport resized");
        self.viewport = (width, height);
    }

    fn render(&mut self, delta: f32) {
        self.frame_count += 1;
        self.elapsed += f64::from(delta);
    }

    fn pause(&mut self) {
        debug!(frames = self.frame_count, "Wizbub paused");
        self.paused = true;
    }

    fn resume(&mut self) {
        debug!("Wizbub resumed");
        self.paused = false;
    }

    fn dispose(&mut self) {
        info!(
            frames = self.frame_count,
            elapsed = self.elapsed,
            "Wizbub disposed"
        );
        self.disposed = true;
    }
}
