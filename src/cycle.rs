//! Tick-driven rotation state for parallax backgrounds.

use crate::MapParallaxConfig;

/// Rotation state machine for one scene's parallax background.
///
/// The state owns its [`MapParallaxConfig`] and does not handle timing
/// itself: the host engine calls [`advance`](CycleState::advance) once
/// per render frame, and the image rotates every `delay_frames` ticks.
///
/// With one image or none, the machine is inactive and `advance` is a
/// no-op; the active image never changes.
///
/// ## Example
///
/// ```rust
/// use parallax_cycle_core::{CycleState, MapParallaxConfig};
///
/// let config = MapParallaxConfig::new(vec!["a".into(), "b".into(), "c".into()], 2);
/// let mut state = CycleState::new(config);
/// assert_eq!(state.active_image(), Some("a"));
///
/// // Call this once per frame from your update loop.
/// state.advance();
/// state.advance();
/// assert_eq!(state.active_image(), Some("b"));
/// ```
#[derive(Clone, Debug)]
pub struct CycleState {
    /// Configuration this state was built from; never mutated.
    config: MapParallaxConfig,
    /// Index of the active image, always within the image list.
    current_index: usize,
    /// Ticks accumulated since the last rotation, always < delay_frames.
    elapsed_ticks: u32,
}

impl CycleState {
    /// Create a fresh state. The first active image is always the first
    /// entry of the list, regardless of delay.
    pub fn new(config: MapParallaxConfig) -> Self {
        Self {
            config,
            current_index: 0,
            elapsed_ticks: 0,
        }
    }

    /// The configuration this state cycles over.
    #[inline]
    pub fn config(&self) -> &MapParallaxConfig {
        &self.config
    }

    /// Index of the active image.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Ticks accumulated toward the next rotation.
    #[inline]
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Whether this state ever rotates.
    #[inline]
    pub fn is_cycling(&self) -> bool {
        self.config.is_animated()
    }

    /// Advance one tick.
    ///
    /// Call this once per render frame. Returns true if the active image
    /// rotated on this tick, so callers know when to refresh the
    /// renderer. Exactly one rotation occurs per `delay_frames` calls
    /// when there are two or more images.
    pub fn advance(&mut self) -> bool {
        if !self.config.is_animated() {
            return false;
        }

        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.config.delay_frames {
            self.elapsed_ticks = 0;
            self.current_index = (self.current_index + 1) % self.config.images.len();
            true
        } else {
            false
        }
    }

    /// The currently active image identifier, or `None` when the scene
    /// has no parallax to draw. Stable between `advance` calls.
    #[inline]
    pub fn active_image(&self) -> Option<&str> {
        self.config.images.get(self.current_index).map(String::as_str)
    }
}
