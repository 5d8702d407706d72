//! Frame-driven timeline scheduler.

use log::debug;

use crate::{Animation, AnimationState, Canvas, LoopMode};

/// How long a binding runs, in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameDuration {
    Finite(u32),
    /// Runs until the whole show is reset
    Infinite,
}

impl FrameDuration {
    /// End frame for a binding starting at `start`, or `None` if it never ends.
    #[inline]
    pub fn end_frame(self, start: u32) -> Option<u32> {
        match self {
            FrameDuration::Finite(frames) => Some(start.saturating_add(frames)),
            FrameDuration::Infinite => None,
        }
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self == FrameDuration::Infinite
    }
}

/// Handle to a binding, returned by [`AnimationManager::add_animation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(pub(crate) usize);

struct Binding {
    animation: Box<dyn Animation>,
    start_frame: u32,
    end_frame: Option<u32>,
}

/// Owns the show's animations and drives them against a global frame counter.
///
/// Each call to [`update`](AnimationManager::update) is one frame tick: the
/// timeline may loop, bindings are started and stopped according to their
/// windows, and every running animation draws into the canvas in the order
/// it was added. Later bindings overwrite earlier ones.
///
/// ## Example
///
/// ```rust
/// use matrix_show::effects::ChristmasTreeAnimation;
/// use matrix_show::{AnimationManager, AnimationState, Canvas, FrameDuration, Geometry, LoopMode};
///
/// let mut manager = AnimationManager::new().with_loop_mode(LoopMode::Once);
/// let tree = manager.add_animation(
///     Box::new(ChristmasTreeAnimation::new(Geometry::default())),
///     5,
///     FrameDuration::Finite(10),
/// );
///
/// for _ in 0..5 {
///     manager.update(&mut Canvas::new());
/// }
/// assert_eq!(manager.state_of(tree), Some(AnimationState::Initialized));
///
/// let mut canvas = Canvas::new();
/// manager.update(&mut canvas);
/// assert_eq!(manager.state_of(tree), Some(AnimationState::Running));
/// assert!(!canvas.is_empty());
/// ```
pub struct AnimationManager {
    bindings: Vec<Binding>,
    global_frame: u32,
    /// `None` until the first binding is added
    duration: Option<FrameDuration>,
    loop_mode: LoopMode,
    frames_between_loops: u32,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.bindings.iter().map(|b| b.animation.name()).collect();
        f.debug_struct("AnimationManager")
            .field("bindings", &names)
            .field("global_frame", &self.global_frame)
            .field("duration", &self.duration)
            .field("loop_mode", &self.loop_mode)
            .field("frames_between_loops", &self.frames_between_loops)
            .finish()
    }
}

impl AnimationManager {
    /// Create an empty looping manager with a 20 frame pause between loops.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            global_frame: 0,
            duration: None,
            loop_mode: LoopMode::Loop,
            frames_between_loops: 20,
        }
    }

    pub fn with_loop_mode(mut self, mode: LoopMode) -> Self {
        self.loop_mode = mode;
        self
    }

    pub fn with_frames_between_loops(mut self, frames: u32) -> Self {
        self.frames_between_loops = frames;
        self
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn set_frames_between_loops(&mut self, frames: u32) {
        self.frames_between_loops = frames;
    }

    #[inline]
    pub fn frames_between_loops(&self) -> u32 {
        self.frames_between_loops
    }

    /// Schedule `animation` to start at `start_frame` and run for `duration`.
    ///
    /// The aggregate timeline length grows to cover the new binding. Once any
    /// binding is infinite the timeline is infinite for good, whatever is
    /// added afterwards.
    pub fn add_animation(
        &mut self,
        animation: Box<dyn Animation>,
        start_frame: u32,
        duration: FrameDuration,
    ) -> BindingId {
        let end_frame = duration.end_frame(start_frame);

        self.duration = match (self.duration, end_frame) {
            (Some(FrameDuration::Infinite), _) | (_, None) => Some(FrameDuration::Infinite),
            (Some(FrameDuration::Finite(current)), Some(end)) => {
                Some(FrameDuration::Finite(current.max(end)))
            }
            (None, Some(end)) => Some(FrameDuration::Finite(end)),
        };

        debug!(
            "show: add animation name={:?} start_frame={} end_frame={:?} timeline={:?}",
            animation.name(),
            start_frame,
            end_frame,
            self.duration
        );

        self.bindings.push(Binding {
            animation,
            start_frame,
            end_frame,
        });
        BindingId(self.bindings.len() - 1)
    }

    /// Advance the show by one frame, drawing every running animation.
    pub fn update(&mut self, canvas: &mut Canvas) {
        if self.loop_due() {
            debug!(
                "show: loop reset at frame={} timeline={:?}",
                self.global_frame, self.duration
            );
            self.reset();
        }

        let frame = self.global_frame;
        for binding in &mut self.bindings {
            let animation = binding.animation.as_mut();

            if frame >= binding.start_frame && animation.state() == AnimationState::Initialized {
                animation.start();
                debug!("show: start animation name={:?} frame={}", animation.name(), frame);
            }

            if let Some(end) = binding.end_frame {
                if frame >= end && animation.state() == AnimationState::Running {
                    animation.stop();
                    debug!("show: stop animation name={:?} frame={}", animation.name(), frame);
                }
            }

            if animation.is_running() {
                animation.update(canvas);
            }
        }

        self.global_frame += 1;
    }

    fn loop_due(&self) -> bool {
        match (self.loop_mode, self.duration) {
            (LoopMode::Loop, Some(FrameDuration::Finite(duration))) => {
                self.global_frame >= duration.saturating_add(self.frames_between_loops)
            }
            _ => false,
        }
    }

    /// Rewind the show to frame 0 and reset every animation.
    pub fn reset(&mut self) {
        self.global_frame = 0;
        for binding in &mut self.bindings {
            binding.animation.reset();
        }
    }

    /// Jump the global clock to `frame`.
    ///
    /// Each animation is told its local frame (`frame - start_frame`, negative
    /// if it has not started). Start/stop transitions are not evaluated here;
    /// the next [`update`](Self::update) applies them, unless an animation
    /// stops itself from its own `set_frame`.
    pub fn set_frame(&mut self, frame: u32) {
        self.global_frame = frame;
        for binding in &mut self.bindings {
            let local = frame as i64 - binding.start_frame as i64;
            binding.animation.set_frame(local);
        }
    }

    /// Current global frame (the number of the next frame to be drawn).
    #[inline]
    pub fn global_frame(&self) -> u32 {
        self.global_frame
    }

    /// Aggregate timeline length, `None` while no binding has been added.
    #[inline]
    pub fn duration(&self) -> Option<FrameDuration> {
        self.duration
    }

    pub fn animation(&self, id: BindingId) -> Option<&dyn Animation> {
        self.bindings.get(id.0).map(|b| b.animation.as_ref())
    }

    pub fn animation_mut(&mut self, id: BindingId) -> Option<&mut (dyn Animation + 'static)> {
        self.bindings.get_mut(id.0).map(|b| b.animation.as_mut())
    }

    pub fn state_of(&self, id: BindingId) -> Option<AnimationState> {
        self.animation(id).map(|a| a.state())
    }

    /// Start frame and end frame (`None` if infinite) of a binding.
    pub fn window_of(&self, id: BindingId) -> Option<(u32, Option<u32>)> {
        self.bindings.get(id.0).map(|b| (b.start_frame, b.end_frame))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
