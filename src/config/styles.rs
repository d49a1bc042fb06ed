//! Mood and tag display registry
//!
//! The notes UI decorates entries with a mood (shown as an emoji) and tags
//! (shown as colored chips). Both dictionaries are keyed by arbitrary
//! user-created category names, so lookups always resolve: unknown moods get
//! a neutral emoji and unknown tags a neutral chip style. New categories are
//! added by explicit insertion only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Emoji shown for a mood the registry has no entry for.
pub const FALLBACK_MOOD_EMOJI: &str = "😐";

/// Chip style for a tag the registry has no entry for.
pub const FALLBACK_TAG_COLOR: &str = "bg-zinc-100 text-zinc-800";

/// Display attributes for note moods and tags, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRegistry {
    /// Mood name to emoji
    #[serde(default)]
    pub mood_emojis: HashMap<String, String>,
    /// Tag name to chip color classes
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mood_emojis = [
            ("happy", "😊"),
            ("motivated", "💪"),
            ("inspired", "💡"),
            ("curious", "🤔"),
            ("excited", "😃"),
            ("thankful", "🙏"),
            ("sad", "😔"),
            ("anxious", "😰"),
            ("calm", "😌"),
            ("tired", "😴"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let tag_colors = [
            ("personal", "bg-blue-100 text-blue-800"),
            ("work", "bg-purple-100 text-purple-800"),
            ("goals", "bg-emerald-100 text-emerald-800"),
            ("planning", "bg-amber-100 text-amber-800"),
            ("books", "bg-rose-100 text-rose-800"),
            ("learning", "bg-indigo-100 text-indigo-800"),
            ("dreams", "bg-violet-100 text-violet-800"),
            ("travel", "bg-sky-100 text-sky-800"),
            ("gratitude", "bg-teal-100 text-teal-800"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            mood_emojis,
            tag_colors,
        }
    }
}

impl StyleRegistry {
    /// Emoji for a mood, falling back to [`FALLBACK_MOOD_EMOJI`].
    pub fn mood_emoji(&self, mood: &str) -> &str {
        self.mood_emojis
            .get(mood)
            .map(String::as_str)
            .unwrap_or(FALLBACK_MOOD_EMOJI)
    }

    /// Chip style for a tag, falling back to [`FALLBACK_TAG_COLOR`].
    pub fn tag_color(&self, tag: &str) -> &str {
        self.tag_colors
            .get(tag)
            .map(String::as_str)
            .unwrap_or(FALLBACK_TAG_COLOR)
    }

    /// Register a custom mood. An empty emoji falls back to the neutral one.
    pub fn add_mood(&mut self, mood: &str, emoji: &str) {
        let emoji = if emoji.trim().is_empty() {
            FALLBACK_MOOD_EMOJI
        } else {
            emoji.trim()
        };
        self.mood_emojis
            .insert(mood.trim().to_lowercase(), emoji.to_string());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
