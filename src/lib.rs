//! # parallax-cycle-core
//!
//! Map parallax background cycling library for tick-driven game scenes.
//!
//! This crate provides engine-agnostic data structures and logic for:
//! - Parsing parallax directives out of a map's free-text note field
//! - Rotating the active background image on a fixed tick cadence
//! - Wiring the cycle into a host engine's setup/update/draw lifecycle
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Enable TOML parsing for [`PluginSettings`]
//!
//! ## Example
//!
//! ```rust
//! use parallax_cycle_core::{build_config, CycleState};
//!
//! // Parse a map's note field
//! let note = "<ParallaxImages: forest1, forest2, forest3>\n<ParallaxDelay: 45>";
//! let config = build_config(note, 60);
//!
//! // Create the rotation state on scene setup
//! let mut state = CycleState::new(config);
//! assert_eq!(state.active_image(), Some("forest1"));
//!
//! // Advance once per render frame
//! for _ in 0..45 {
//!     state.advance();
//! }
//! assert_eq!(state.active_image(), Some("forest2"));
//! ```

mod config;
mod cycle;
mod parser;
mod scene;
mod settings;

pub use config::MapParallaxConfig;
pub use cycle::CycleState;
pub use parser::build_config;
pub use scene::{MapParallax, ParallaxRenderer};
pub use settings::{PluginSettings, DEFAULT_DELAY_FRAMES, PARALLAX_IMAGE_DIR};
