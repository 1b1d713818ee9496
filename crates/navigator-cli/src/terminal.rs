//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold underline for section titles.
    pub const TITLE: &str = "\x1b[1;4m";
    /// Cyan for route paths and list indices.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow for landmark names in listings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Green for prompts.
    pub const GREEN: &str = "\x1b[32m";
    /// Bright green for distances.
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    /// Bright yellow for walking times.
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    /// Red for input errors.
    pub const RED: &str = "\x1b[31m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
    pub distance: &'static str,
    pub time: &'static str,
    pub error: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            title: colors::TITLE,
            path: colors::CYAN,
            name: colors::YELLOW,
            prompt: colors::GREEN,
            distance: colors::BRIGHT_GREEN,
            time: colors::BRIGHT_YELLOW,
            error: colors::RED,
            gray: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            title: "",
            path: "",
            name: "",
            prompt: "",
            distance: "",
            time: "",
            error: "",
            gray: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in `color` followed by a reset.
    pub fn wrap(&self, color: &str, text: impl std::fmt::Display) -> String {
        format!("{color}{text}{}", self.reset)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters.
///
/// Looks for a UTF hint in `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

/// Arrow used between landmarks when rendering a path.
#[must_use]
pub fn path_separator() -> &'static str {
    if supports_unicode() {
        " ➔ "
    } else {
        " -> "
    }
}
