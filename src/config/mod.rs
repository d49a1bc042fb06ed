//! Display configuration for the surrounding notes UI
//!
//! Mood and tag display attributes, keyed by arbitrary category names with
//! defined fallbacks, persisted as JSON in the platform config directory.

mod persistence;
mod styles;

pub use persistence::{get_config_dir, get_styles_file_path, load_styles, save_styles};
pub use styles::{StyleRegistry, FALLBACK_MOOD_EMOJI, FALLBACK_TAG_COLOR};
