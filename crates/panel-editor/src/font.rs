//! Display font of the text area.

use std::fmt;

/// Font family and point size.
///
/// Zooming has no visual effect. The terminal owns the glyph size, so the
/// font is editor state that only the status bar displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    /// Size in points. Not clamped.
    pub size: i32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: i32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Same family, size changed by `delta` points
    pub fn resized(&self, delta: i32) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size.saturating_add(delta),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Monospaced", 13)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_keeps_family() {
        let font = Font::default();
        let bigger = font.resized(1);
        assert_eq!(bigger.family, "Monospaced");
        assert_eq!(bigger.size, 14);
        assert_eq!(bigger.resized(-1), font);
    }

    #[test]
    fn test_size_may_go_negative() {
        let font = Font::new("Monospaced", 0).resized(-1);
        assert_eq!(font.size, -1);
        assert_eq!(font.to_string(), "Monospaced -1pt");
    }
}
