//! Engine runtime
//!
//! Window creation, icon loading and the lifecycle callback loop the
//! launcher hands the game to.

pub mod config;
mod error;
pub mod files;
pub mod icon;
pub mod lifecycle;
mod runner;
pub mod timing;
mod window;

pub use config::{IconRef, LauncherConfig};
pub use error::LaunchError;
pub use files::{FileError, FileRoots, FileType};
pub use icon::{IconError, IconSet};
pub use lifecycle::{ApplicationListener, Lifecycle, Phase};
pub use runner::{DesktopRuntime, Runtime};
pub use window::window_attributes;
