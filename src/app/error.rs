use thiserror::Error;

use super::icon::IconError;

/// Failures that abort application startup
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Icon(#[from] IconError),
}
