//! Desktop runtime driving the game from a winit event loop

use std::time::Instant;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::config::LauncherConfig;
use super::error::LaunchError;
use super::files::FileRoots;
use super::icon::IconSet;
use super::lifecycle::{ApplicationListener, Lifecycle};
use super::timing::{FrameClock, FramePacer};
use super::window::window_attributes;

/// Blocking application entry point
pub trait Runtime {
    /// Runs the game until the application exits
    ///
    /// Takes ownership of both the game and its configuration.
    fn start(
        &mut self,
        listener: Box<dyn ApplicationListener>,
        config: LauncherConfig,
    ) -> Result<(), LaunchError>;
}

/// Runs the game in a native window on the current thread
#[derive(Debug, Default)]
pub struct DesktopRuntime;

impl DesktopRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl Runtime for DesktopRuntime {
    fn start(
        &mut self,
        listener: Box<dyn ApplicationListener>,
        config: LauncherConfig,
    ) -> Result<(), LaunchError> {
        let roots = FileRoots::discover(config.asset_root.as_deref());
        info!(asset_root = %roots.internal().display(), "Resolving assets");

        let icons = IconSet::load(config.icons(), &roots)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = DesktopApplication::new(config, icons, listener);
        let result = event_loop.run_app(&mut app);
        // The game is disposed even when the loop itself failed
        let finished = app.finish();
        result?;
        finished
    }
}

struct DesktopApplication {
    config: LauncherConfig,
    icons: IconSet,
    lifecycle: Lifecycle,
    window: Option<Window>,
    clock: FrameClock,
    pacer: FramePacer,
    focused: bool,
    error: Option<LaunchError>,
}

impl DesktopApplication {
    fn new(config: LauncherConfig, icons: IconSet, listener: Box<dyn ApplicationListener>) -> Self {
        Self {
            config,
            icons,
            lifecycle: Lifecycle::new(listener),
            window: None,
            clock: FrameClock::new(),
            pacer: FramePacer::new(),
            focused: true,
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), LaunchError> {
        let icon = self.icons.window_icon()?;
        let attrs = window_attributes(&self.config.title, &self.config.window, icon);
        let window = event_loop.create_window(attrs)?;

        let size = window.inner_size();
        info!(
            title = %self.config.title,
            window.width = size.width,
            window.height = size.height,
            "Window created"
        );

        self.lifecycle.create(size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        if !self.config.window.pause_when_unfocused {
            return;
        }

        if focused {
            self.clock.reset();
            self.lifecycle.resume();
        } else {
            self.lifecycle.pause();
        }
    }

    fn fps_cap(&self) -> u32 {
        if self.focused {
            self.config.window.foreground_fps
        } else {
            self.config.window.background_fps
        }
    }

    fn finish(mut self) -> Result<(), LaunchError> {
        self.lifecycle.dispose();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for DesktopApplication {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            error!(error = %e, "Failed to start application");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if !self.lifecycle.is_running() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let fps = self.fps_cap();
        if self.pacer.poll(Instant::now(), fps) {
            window.request_redraw();
        }

        match self.pacer.next_frame() {
            Some(next) => event_loop.set_control_flow(ControlFlow::WaitUntil(next)),
            None => event_loop.set_control_flow(ControlFlow::Poll),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                self.lifecycle.dispose();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.lifecycle.resize(size.width, size.height),
            WindowEvent::Focused(focused) => self.focus_changed(focused),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick(Instant::now());
                self.lifecycle.render(delta);
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.lifecycle.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FileError;
    use crate::app::icon::IconError;
    use crate::config::WindowSettings;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl ApplicationListener for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }
        fn create(&mut self) {
            self.0.borrow_mut().push("create");
        }
        fn resize(&mut self, _width: u32, _height: u32) {}
        fn render(&mut self, _delta: f32) {
            self.0.borrow_mut().push("render");
        }
        fn pause(&mut self) {
            self.0.borrow_mut().push("pause");
        }
        fn resume(&mut self) {
            self.0.borrow_mut().push("resume");
        }
        fn dispose(&mut self) {
            self.0.borrow_mut().push("dispose");
        }
    }

    fn app(window: WindowSettings) -> (DesktopApplication, Rc<RefCell<Vec<&'static str>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = LauncherConfig::new("Test").with_window(window);
        let mut app =
            DesktopApplication::new(config, IconSet::default(), Box::new(Recorder(log.clone())));
        app.lifecycle.create(640, 480);
        (app, log)
    }

    #[test]
    fn test_focus_loss_pauses_and_gain_resumes() {
        let (mut app, log) = app(WindowSettings {
            pause_when_unfocused: true,
            ..WindowSettings::default()
        });

        app.focus_changed(false);
        assert!(!app.lifecycle.is_running());
        app.focus_changed(true);
        assert!(app.lifecycle.is_running());

        assert_eq!(*log.borrow(), ["create", "pause", "resume"]);
    }

    #[test]
    fn test_focus_ignored_when_pausing_disabled() {
        let (mut app, log) = app(WindowSettings {
            pause_when_unfocused: false,
            ..WindowSettings::default()
        });

        app.focus_changed(false);
        assert!(app.lifecycle.is_running());
        app.focus_changed(true);

        assert_eq!(*log.borrow(), ["create"]);
    }

    #[test]
    fn test_fps_cap_follows_focus() {
        let (mut app, _log) = app(WindowSettings {
            foreground_fps: 60,
            background_fps: 5,
            pause_when_unfocused: false,
            ..WindowSettings::default()
        });

        assert_eq!(app.fps_cap(), 60);
        app.focus_changed(false);
        assert_eq!(app.fps_cap(), 5);
        app.focus_changed(true);
        assert_eq!(app.fps_cap(), 60);
    }

    #[test]
    fn test_finish_disposes_then_returns_stored_error() {
        let (mut app, log) = app(WindowSettings::default());
        app.error = Some(LaunchError::Icon(IconError::Resolve(
            FileError::NoHomeDirectory {
                path: "icon.png".into(),
            },
        )));

        let result = app.finish();

        assert!(matches!(result, Err(LaunchError::Icon(_))));
        assert_eq!(*log.borrow(), ["create", "pause", "dispose"]);
    }

    #[test]
    fn test_finish_without_error_is_ok() {
        let (app, log) = app(WindowSettings::default());
        assert!(app.finish().is_ok());
        assert_eq!(log.borrow().last(), Some(&"dispose"));
    }
}
