//! Style registry persistence
//!
//! Loads and saves the [`StyleRegistry`] as pretty JSON in the platform
//! configuration directory, with graceful fallback to the built-in defaults
//! when the file is missing, empty, or corrupted.

use crate::config::StyleRegistry;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "notemark";

/// Style registry file name
const STYLES_FILE_NAME: &str = "styles.json";

/// Backup file name used during atomic writes
const STYLES_BACKUP_NAME: &str = "styles.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\notemark\`
/// - **macOS**: `~/Library/Application Support/notemark/`
/// - **Linux**: `~/.config/notemark/`
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Full path to the style registry file.
pub fn get_styles_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(STYLES_FILE_NAME))
}

fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir).map_err(|e| Error::StylesSave {
            path: config_dir.clone(),
            source: Box::new(e),
        })?;
    }
    Ok(config_dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load
// ─────────────────────────────────────────────────────────────────────────────

/// Load the style registry from its default location, falling back to the
/// built-in defaults on any failure (logged at warning level).
pub fn load_styles() -> StyleRegistry {
    load_styles_internal().unwrap_or_warn_default(StyleRegistry::default(), "Failed to load styles")
}

fn load_styles_internal() -> Result<StyleRegistry> {
    let path = get_styles_file_path()?;

    if !path.exists() {
        debug!("Styles file not found at {}, using defaults", path.display());
        return Ok(StyleRegistry::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| Error::StylesLoad {
        path: path.clone(),
        source: Box::new(e),
    })?;
    parse_styles(&contents, &path)
}

/// Parse registry JSON; empty content means defaults.
fn parse_styles(contents: &str, path: &std::path::Path) -> Result<StyleRegistry> {
    if contents.trim().is_empty() {
        debug!("Styles file is empty, using defaults");
        return Ok(StyleRegistry::default());
    }

    let styles: StyleRegistry = serde_json::from_str(contents).map_err(|e| {
        warn!("Styles file at {} contains invalid JSON: {}", path.display(), e);
        Error::StylesParse {
            message: format!("Failed to parse styles file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Styles loaded from {}", path.display());
    Ok(styles)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────────────────

/// Save the style registry to its default location.
///
/// Writes to a backup file first and renames it over the original, so a
/// crash mid-write cannot leave a truncated registry behind.
pub fn save_styles(styles: &StyleRegistry) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    let path = config_dir.join(STYLES_FILE_NAME);
    let backup_path = config_dir.join(STYLES_BACKUP_NAME);

    debug!("Saving styles to: {}", path.display());

    let json = serde_json::to_string_pretty(styles).map_err(|e| Error::StylesSave {
        path: path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::StylesSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &path).map_err(|e| Error::StylesSave {
        path: path.clone(),
        source: Box::new(e),
    })?;

    info!("Styles saved to {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
