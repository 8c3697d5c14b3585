// Цвета для сообщений матчеров

use owo_colors::OwoColorize;

/// Colour palette; every helper degrades to plain text when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn received(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn expected(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette() {
        let palette = Palette::new(false);
        assert_eq!(palette.received("x"), "x");
        assert_eq!(palette.expected("x"), "x");
        assert_eq!(palette.dim("x"), "x");
        assert_eq!(palette.bold("x"), "x");
    }

    #[test]
    fn test_colored_palette_wraps_in_ansi() {
        let palette = Palette::new(true);
        let red = palette.received("x");
        assert!(red.starts_with("\u{1b}["));
        assert!(red.contains('x'));
        assert_ne!(red, palette.expected("x"));
    }
}
