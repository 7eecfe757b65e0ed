//! Scene integration for host engines.
//!
//! The host wires three lifecycle points into this module: scene setup
//! ([`MapParallax::from_note`]), the per-frame update loop
//! ([`MapParallax::update`]), and the initial draw
//! ([`MapParallax::prime`]). The cycler is a plain scene-owned value:
//! create it when the scene loads, drop it when the scene unloads.

use crate::{build_config, CycleState, MapParallaxConfig};

/// Rendering collaborator that resolves an image identifier to pixels.
///
/// Implement this for whatever backdrop or spriteset type the host
/// engine draws parallax with. Identifiers refer to images in
/// [`crate::PARALLAX_IMAGE_DIR`], without file extension.
pub trait ParallaxRenderer {
    /// Switch the scene's parallax to the named image.
    fn set_parallax_name(&mut self, name: &str);
}

/// Scene-owned parallax cycler bundling config parsing and rotation.
///
/// ## Example
///
/// ```rust
/// use parallax_cycle_core::{MapParallax, ParallaxRenderer};
///
/// struct Backdrop {
///     parallax_name: String,
/// }
///
/// impl ParallaxRenderer for Backdrop {
///     fn set_parallax_name(&mut self, name: &str) {
///         self.parallax_name = name.to_string();
///     }
/// }
///
/// let mut backdrop = Backdrop { parallax_name: String::new() };
/// let mut parallax = MapParallax::from_note("<ParallaxImages: day, night>", 60);
///
/// // Before the first frame renders:
/// parallax.prime(&mut backdrop);
/// assert_eq!(backdrop.parallax_name, "day");
///
/// // Once per frame:
/// for _ in 0..60 {
///     parallax.update(&mut backdrop);
/// }
/// assert_eq!(backdrop.parallax_name, "night");
/// ```
#[derive(Clone, Debug)]
pub struct MapParallax {
    state: CycleState,
}

impl MapParallax {
    /// Scene-setup hook: parse the map's note field and start a fresh
    /// cycle.
    pub fn from_note(note_text: &str, default_delay: u32) -> Self {
        Self::new(build_config(note_text, default_delay))
    }

    /// Start a fresh cycle over an already-built config.
    pub fn new(config: MapParallaxConfig) -> Self {
        Self {
            state: CycleState::new(config),
        }
    }

    /// Initial-draw hook: push the starting image to the renderer before
    /// the first frame. Does nothing when the map has no parallax
    /// images.
    pub fn prime<R: ParallaxRenderer>(&self, renderer: &mut R) {
        if let Some(name) = self.state.active_image() {
            renderer.set_parallax_name(name);
        }
    }

    /// Per-tick hook: advance the cycle and refresh the renderer when
    /// the image rotated. Returns true on rotation ticks.
    pub fn update<R: ParallaxRenderer>(&mut self, renderer: &mut R) -> bool {
        let rotated = self.state.advance();
        if rotated {
            self.prime(renderer);
        }
        rotated
    }

    /// The underlying rotation state.
    #[inline]
    pub fn state(&self) -> &CycleState {
        &self.state
    }
}
