//! The animation contract and its lifecycle state machine.

use crate::Canvas;

/// Loop mode for scheduled timelines and looping effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopMode {
    /// Stop at the end
    Once,
    /// Wrap back to the start when reaching the end
    #[default]
    Loop,
}

/// Current state of an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// Created (or reset) but not started yet
    #[default]
    Initialized,
    /// Drawing on every update
    Running,
    /// Stopped; updates are no-ops until reset
    Stopped,
}

/// Lifecycle fields shared by every animation.
///
/// Concrete effects embed one of these and hand it out through
/// [`Animation::lifecycle`], which gives them the default state machine.
#[derive(Clone, Debug)]
pub struct Lifecycle {
    name: String,
    state: AnimationState,
    frame_count: u32,
}

impl Lifecycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: AnimationState::Initialized,
            frame_count: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Start or resume. Idempotent.
    pub fn start(&mut self) {
        self.state = AnimationState::Running;
    }

    /// Stop from any state. Idempotent.
    pub fn stop(&mut self) {
        self.state = AnimationState::Stopped;
    }

    /// Back to `Initialized` with a zero frame counter.
    pub fn reset(&mut self) {
        self.state = AnimationState::Initialized;
        self.frame_count = 0;
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[inline]
    pub fn set_frame_count(&mut self, frame: u32) {
        self.frame_count = frame;
    }

    /// Count one frame if running. Returns whether the frame was counted.
    pub fn tick(&mut self) -> bool {
        if self.is_running() {
            self.frame_count += 1;
            true
        } else {
            false
        }
    }
}

/// A unit of visual behavior driven one frame at a time.
///
/// Only [`update`](Animation::update) and the lifecycle accessors are
/// required. Effects with transient state must override
/// [`reset`](Animation::reset) and call through to the lifecycle; effects
/// with phase logic override [`set_frame`](Animation::set_frame).
///
/// ## Example
///
/// ```rust
/// use matrix_show::{Animation, AnimationState, Canvas, Color, Lifecycle};
///
/// struct Blink {
///     lifecycle: Lifecycle,
/// }
///
/// impl Animation for Blink {
///     fn lifecycle(&self) -> &Lifecycle {
///         &self.lifecycle
///     }
///
///     fn lifecycle_mut(&mut self) -> &mut Lifecycle {
///         &mut self.lifecycle
///     }
///
///     fn update(&mut self, canvas: &mut Canvas) {
///         if self.lifecycle.tick() && self.frame_count() % 2 == 1 {
///             canvas.set(0, Color::new(5, 0, 0));
///         }
///     }
/// }
///
/// let mut blink = Blink { lifecycle: Lifecycle::new("blink") };
/// let mut canvas = Canvas::new();
/// blink.update(&mut canvas);
/// assert!(canvas.is_empty());
///
/// blink.start();
/// blink.update(&mut canvas);
/// assert_eq!(canvas.get(0), Some(Color::new(5, 0, 0)));
/// assert_eq!(blink.state(), AnimationState::Running);
/// ```
pub trait Animation {
    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Draw this frame into `canvas` and advance. Must be a no-op unless
    /// the animation is running.
    fn update(&mut self, canvas: &mut Canvas);

    fn name(&self) -> &str {
        self.lifecycle().name()
    }

    fn state(&self) -> AnimationState {
        self.lifecycle().state()
    }

    fn is_running(&self) -> bool {
        self.lifecycle().is_running()
    }

    fn frame_count(&self) -> u32 {
        self.lifecycle().frame_count()
    }

    fn start(&mut self) {
        self.lifecycle_mut().start();
    }

    fn stop(&mut self) {
        self.lifecycle_mut().stop();
    }

    fn reset(&mut self) {
        self.lifecycle_mut().reset();
    }

    /// Jump to a local frame without replaying intermediate updates.
    ///
    /// `frame` is relative to the binding's start and is negative while the
    /// binding has not started yet. The default clamps the counter at zero.
    fn set_frame(&mut self, frame: i64) {
        let frame = frame.clamp(0, u32::MAX as i64) as u32;
        self.lifecycle_mut().set_frame_count(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;

    struct Dot {
        lifecycle: Lifecycle,
    }

    impl Animation for Dot {
        fn lifecycle(&self) -> &Lifecycle {
            &self.lifecycle
        }

        fn lifecycle_mut(&mut self) -> &mut Lifecycle {
            &mut self.lifecycle
        }

        fn update(&mut self, canvas: &mut Canvas) {
            if self.lifecycle.tick() {
                canvas.set(3, RED);
            }
        }
    }

    fn dot() -> Dot {
        Dot {
            lifecycle: Lifecycle::new("dot"),
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut anim = dot();
        assert_eq!(anim.state(), AnimationState::Initialized);

        anim.start();
        anim.start();
        assert_eq!(anim.state(), AnimationState::Running);

        anim.stop();
        anim.stop();
        assert_eq!(anim.state(), AnimationState::Stopped);

        anim.reset();
        assert_eq!(anim.state(), AnimationState::Initialized);
        assert_eq!(anim.name(), "dot");
    }

    #[test]
    fn test_stop_from_initialized() {
        let mut anim = dot();
        anim.stop();
        assert_eq!(anim.state(), AnimationState::Stopped);
    }

    #[test]
    fn test_update_only_while_running() {
        let mut anim = dot();
        let mut canvas = Canvas::new();

        anim.update(&mut canvas);
        assert!(canvas.is_empty());
        assert_eq!(anim.frame_count(), 0);

        anim.start();
        anim.update(&mut canvas);
        anim.update(&mut canvas);
        assert_eq!(canvas.get(3), Some(RED));
        assert_eq!(anim.frame_count(), 2);

        anim.stop();
        canvas.clear();
        anim.update(&mut canvas);
        assert!(canvas.is_empty());
        assert_eq!(anim.frame_count(), 2);
    }

    #[test]
    fn test_reset_clears_frame_count() {
        let mut anim = dot();
        anim.start();
        anim.update(&mut Canvas::new());
        anim.reset();
        assert_eq!(anim.frame_count(), 0);
    }

    #[test]
    fn test_default_set_frame() {
        let mut anim = dot();
        anim.set_frame(42);
        assert_eq!(anim.frame_count(), 42);
        assert_eq!(anim.state(), AnimationState::Initialized);

        anim.set_frame(-5);
        assert_eq!(anim.frame_count(), 0);
    }
}
