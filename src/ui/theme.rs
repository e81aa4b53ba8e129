//! Colours and symbols resolved from configuration.

use crate::config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const SPINNER_UNICODE: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Resolved UI theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub heading: Color,
    pub accent: Color,
    pub gain: Color,
    pub loss: Color,
    pub error: Color,
    pub border: Color,
    pub selection: Color,
    /// Whether to draw carets and spinners with unicode glyphs.
    pub unicode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), true)
    }
}

impl Theme {
    /// Build a theme from configuration. Unparseable colours fall back to
    /// the terminal default.
    pub fn from_config(config: &ThemeConfig, unicode: bool) -> Self {
        Self {
            background: parse_color("background", &config.background),
            foreground: parse_color("foreground", &config.foreground),
            heading: parse_color("heading", &config.heading),
            accent: parse_color("accent", &config.accent),
            gain: parse_color("gain", &config.gain),
            loss: parse_color("loss", &config.loss),
            error: parse_color("error", &config.error),
            border: parse_color("border", &config.border),
            selection: parse_color("selection", &config.selection),
            unicode,
        }
    }

    /// Base style for screen backgrounds.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Bold heading style.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style.
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight style for the selected row.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// Colour for a price change.
    pub fn change_color(&self, gaining: bool) -> Color {
        if gaining { self.gain } else { self.loss }
    }

    /// Up/down caret.
    pub fn caret(&self, gaining: bool) -> &'static str {
        match (self.unicode, gaining) {
            (true, true) => "▲",
            (true, false) => "▼",
            (false, true) => "^",
            (false, false) => "v",
        }
    }

    /// Spinner frame for the given animation tick.
    pub fn spinner(&self, tick: u64) -> &'static str {
        let frames: &[&'static str] = if self.unicode {
            &SPINNER_UNICODE
        } else {
            &SPINNER_ASCII
        };
        frames[(tick % frames.len() as u64) as usize]
    }
}

fn parse_color(name: &str, value: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(color = name, value, "Invalid theme colour, using default");
        Color::Reset
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.gain, Color::Rgb(0x6A, 0xC7, 0x7E));
        assert_eq!(theme.loss, Color::Rgb(0xD0, 0x58, 0x5C));
        assert_eq!(theme.accent, Color::Rgb(0xFF, 0x5F, 0x1F));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            accent: "not-a-colour".to_string(),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config, true).accent, Color::Reset);
    }

    #[test]
    fn test_symbols() {
        let theme = Theme::default();
        assert_eq!(theme.caret(true), "▲");
        assert_eq!(theme.caret(false), "▼");
        assert_eq!(theme.spinner(0), theme.spinner(SPINNER_UNICODE.len() as u64));

        let ascii = Theme::from_config(&ThemeConfig::default(), false);
        assert_eq!(ascii.caret(true), "^");
        assert_eq!(ascii.spinner(1), "/");
    }
}
