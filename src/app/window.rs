//! Window attributes

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Icon, WindowAttributes};

use crate::config::WindowSettings;

/// Builds window attributes from the title, settings and optional icon
pub fn window_attributes(
    title: &str,
    settings: &WindowSettings,
    icon: Option<Icon>,
) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(title)
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_resizable(settings.resizable)
        .with_decorations(settings.decorated)
        .with_window_icon(icon);

    if settings.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}
