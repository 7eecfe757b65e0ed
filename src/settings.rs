//! Process-wide plugin settings.

/// Delay in ticks used when neither the settings nor a map note provide
/// one.
pub const DEFAULT_DELAY_FRAMES: u32 = 60;

/// Directory the rendering collaborator resolves image identifiers in.
pub const PARALLAX_IMAGE_DIR: &str = "img/parallaxes";

/// Host-configured parameters for the parallax cycler.
///
/// All fields are optional; missing or invalid values resolve to the
/// built-in defaults rather than an error.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PluginSettings {
    /// Default delay (in ticks) for maps whose note has no delay
    /// directive. Must be >= 1 to take effect.
    pub default_delay: Option<u32>,
}

impl PluginSettings {
    /// Parse a settings string in TOML form into `PluginSettings`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The default delay to hand to [`crate::build_config`].
    ///
    /// Falls back to [`DEFAULT_DELAY_FRAMES`] when the field is missing
    /// or below 1.
    pub fn delay_or_default(&self) -> u32 {
        match self.default_delay {
            Some(delay) if delay >= 1 => delay,
            _ => DEFAULT_DELAY_FRAMES,
        }
    }
}
