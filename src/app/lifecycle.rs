//! Game lifecycle callbacks and their ordering

use tracing::debug;

/// Callbacks the runtime invokes on the game object
///
/// The runtime guarantees the ordering enforced by [`Lifecycle`]:
/// `create` once, an initial `resize`, then any mix of `render`, `resize`,
/// `pause` and `resume`, and finally `dispose` once.
pub trait ApplicationListener {
    /// Name of the game, for logging
    fn name(&self) -> &str;

    /// Called once, after the window exists
    fn create(&mut self);

    /// Called with the new drawable size in physical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Called once per frame while running
    ///
    /// # Arguments
    /// * `delta` - Seconds since the previous frame
    fn render(&mut self, delta: f32);

    /// Called when the application loses focus or is about to be disposed
    fn pause(&mut self);

    /// Called when the application regains focus after a pause
    fn resume(&mut self);

    /// Called once before the application exits
    fn dispose(&mut self);
}

/// Where the application is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `create` has not been called yet
    Pending,
    Running,
    Paused,
    Disposed,
}

/// Owns the game object and drops callbacks that would break ordering
pub struct Lifecycle {
    listener: Box<dyn ApplicationListener>,
    phase: Phase,
    size: (u32, u32),
}

impl Lifecycle {
    pub fn new(listener: Box<dyn ApplicationListener>) -> Self {
        Self {
            listener,
            phase: Phase::Pending,
            size: (0, 0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while frames should be rendered
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Last size forwarded to the listener
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Creates the game and reports its initial size
    pub fn create(&mut self, width: u32, height: u32) {
        if self.phase != Phase::Pending {
            return;
        }

        debug!(name = self.listener.name(), width, height, "Creating application");
        self.listener.create();
        self.phase = Phase::Running;
        self.size = (width, height);
        self.listener.resize(width, height);
    }

    /// Forwards a size change; zero-sized (minimized) and repeated sizes are dropped
    pub fn resize(&mut self, width: u32, height: u32) {
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            return;
        }
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }

        self.size = (width, height);
        self.listener.resize(width, height);
    }

    /// Renders one frame, returning false if the frame was skipped
    pub fn render(&mut self, delta: f32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.listener.render(delta);
        true
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            debug!("Pausing application");
            self.phase = Phase::Paused;
            self.listener.pause();
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            debug!("Resuming application");
            self.phase = Phase::Running;
            self.listener.resume();
        }
    }

    /// Pauses if needed and disposes the game; later calls do nothing
    pub fn dispose(&mut self) {
        match self.phase {
            Phase::Running => {
                self.listener.pause();
                self.listener.dispose();
            }
            Phase::Paused => self.listener.dispose(),
            // Never created, so there is nothing to release
            Phase::Pending | Phase::Disposed => {}
        }
        if self.phase != Phase::Disposed {
            debug!("Application disposed");
        }
        self.phase = Phase::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every callback it receives
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ApplicationListener for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }
        fn create(&mut self) {
            self.0.borrow_mut().push("create".into());
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.0.borrow_mut().push(format!("resize {width}x{height}"));
        }
        fn render(&mut self, _delta: f32) {
            self.0.borrow_mut().push("render".into());
        }
        fn pause(&mut self) {
            self.0.borrow_mut().push("pause".into());
        }
        fn resume(&mut self) {
            self.0.borrow_mut().push("resume".into());
        }
        fn dispose(&mut self) {
            self.0.borrow_mut().push("dispose".into());
        }
    }

    fn recorded() -> (Lifecycle, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Lifecycle::new(Box::new(Recorder(log.clone()))), log)
    }

    #[test]
    fn test_create_is_followed_by_resize() {
        let (mut lifecycle, log) = recorded();
        lifecycle.create(640, 480);
        lifecycle.create(800, 600);

        assert_eq!(*log.borrow(), ["create", "resize 640x480"]);
        assert_eq!(lifecycle.phase(), Phase::Running);
    }

    #[test]
    fn test_nothing_before_create() {
        let (mut lifecycle, log) = recorded();
        lifecycle.resize(10, 10);
        assert!(!lifecycle.render(0.016));
        lifecycle.pause();
        lifecycle.resume();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_paused_skips_render() {
        let (mut lifecycle, log) = recorded();
        lifecycle.create(100, 100);
        lifecycle.pause();
        lifecycle.pause();
        assert!(!lifecycle.render(0.016));
        lifecycle.resume();
        lifecycle.resume();
        assert!(lifecycle.render(0.016));

        assert_eq!(
            *log.borrow(),
            ["create", "resize 100x100", "pause", "resume", "render"]
        );
    }

    #[test]
    fn test_resize_drops_minimized_and_repeats() {
        let (mut lifecycle, log) = recorded();
        lifecycle.create(100, 100);
        lifecycle.resize(100, 100);
        lifecycle.resize(0, 0);
        lifecycle.resize(200, 150);

        assert_eq!(
            *log.borrow(),
            ["create", "resize 100x100", "resize 200x150"]
        );
        assert_eq!(lifecycle.size(), (200, 150));
    }

    #[test]
    fn test_dispose_pauses_running_app_once() {
        let (mut lifecycle, log) = recorded();
        lifecycle.create(100, 100);
        lifecycle.dispose();
        lifecycle.dispose();
        assert!(!lifecycle.render(0.016));
        lifecycle.resume();

        assert_eq!(
            *log.borrow(),
            ["create", "resize 100x100", "pause", "dispose"]
        );
        assert_eq!(lifecycle.phase(), Phase::Disposed);
    }

    #[test]
    fn test_dispose_paused_app_skips_second_pause() {
        let (mut lifecycle, log) = recorded();
        lifecycle.create(100, 100);
        lifecycle.pause();
        lifecycle.dispose();

        assert_eq!(
            *log.borrow(),
            ["create", "resize 100x100", "pause", "dispose"]
        );
    }

    #[test]
    fn test_dispose_before_create_is_silent() {
        let (mut lifecycle, log) = recorded();
        lifecycle.dispose();
        lifecycle.create(100, 100);

        assert!(log.borrow().is_empty());
        assert_eq!(lifecycle.phase(), Phase::Disposed);
    }
}
