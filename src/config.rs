//! Core data structure for a map's parallax configuration.

/// Validated parallax configuration for one map scene.
///
/// Built once per scene load (normally via [`crate::build_config`]) and
/// handed to a [`crate::CycleState`], which takes ownership so the image
/// list cannot change mid-cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapParallaxConfig {
    /// Ordered image identifiers (no file extension). Insertion order
    /// defines cycle order. Empty means the feature is off for this map.
    pub images: Vec<String>,
    /// Ticks between rotations, always >= 1.
    pub delay_frames: u32,
}

impl MapParallaxConfig {
    /// Create a new config. A zero delay is clamped to 1.
    pub fn new(images: Vec<String>, delay_frames: u32) -> Self {
        Self {
            images,
            delay_frames: delay_frames.max(1),
        }
    }

    /// Config with no images: parallax cycling disabled for this scene.
    pub fn disabled(delay_frames: u32) -> Self {
        Self::new(Vec::new(), delay_frames)
    }

    /// Number of images in the cycle.
    #[inline]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Whether this config will ever rotate (more than one image).
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.images.len() > 1
    }
}
