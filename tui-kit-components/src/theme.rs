//! Color tokens shared by the widgets
//!
//! Widgets never pick colors themselves; they read them from a [`Theme`]
//! passed in props. Hosts switch between [`Theme::light`] and
//! [`Theme::dark`] and may override single tokens from JSON:
//!
//! ```json
//! { "accent": "#22c55e", "row_alt": "#1f2937" }
//! ```

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ThemeError;

/// A complete set of color tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Page background behind the widgets
    pub surface: Color,
    /// Primary text
    pub fg: Color,
    /// Placeholders, helper text, empty-state text
    pub muted: Color,
    /// Focus rings, sort glyphs, checked boxes
    pub accent: Color,
    /// Invalid borders and error text
    pub error: Color,
    /// Unfocused borders
    pub border: Color,
    /// Filled input background
    pub input_bg: Color,
    pub header_bg: Color,
    pub row_bg: Color,
    /// Background of every other body row
    pub row_alt: Color,
    /// Loading overlay background
    pub overlay_bg: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            name: "light",
            surface: Color::Rgb(0xff, 0xff, 0xff),
            fg: Color::Rgb(0x11, 0x18, 0x27),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            accent: Color::Rgb(0x63, 0x66, 0xf1),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            input_bg: Color::Rgb(0xf3, 0xf4, 0xf6),
            header_bg: Color::Rgb(0xf9, 0xfa, 0xfb),
            row_bg: Color::Rgb(0xff, 0xff, 0xff),
            row_alt: Color::Rgb(0xf9, 0xfa, 0xfb),
            overlay_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
        }
    }

    pub const fn dark() -> Self {
        Self {
            name: "dark",
            surface: Color::Rgb(0x2a, 0x2b, 0x2e),
            fg: Color::Rgb(0xf9, 0xfa, 0xfb),
            muted: Color::Rgb(0x9c, 0xa3, 0xaf),
            accent: Color::Rgb(0x81, 0x8c, 0xf8),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            border: Color::Rgb(0x37, 0x41, 0x51),
            input_bg: Color::Rgb(0x3a, 0x3b, 0x3c),
            header_bg: Color::Rgb(0x40, 0x40, 0x40),
            row_bg: Color::Rgb(0x24, 0x25, 0x26),
            row_alt: Color::Rgb(0x3a, 0x3b, 0x3c),
            overlay_bg: Color::Rgb(0x2a, 0x2b, 0x2e),
        }
    }

    /// Pick the palette for the host's dark-mode flag
    pub const fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply token overrides from a JSON object
    pub fn with_overrides_json(self, json: &str) -> Result<Self, ThemeError> {
        let overrides: ThemeOverrides = serde_json::from_str(json)?;
        overrides.apply(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Optional per-token overrides, colors as names or `#rrggbb`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    pub surface: Option<String>,
    pub fg: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub error: Option<String>,
    pub border: Option<String>,
    pub input_bg: Option<String>,
    pub header_bg: Option<String>,
    pub row_bg: Option<String>,
    pub row_alt: Option<String>,
    pub overlay_bg: Option<String>,
}

impl ThemeOverrides {
    pub fn apply(self, mut theme: Theme) -> Result<Theme, ThemeError> {
        let slots: [(&'static str, Option<String>, &mut Color); 11] = [
            ("surface", self.surface, &mut theme.surface),
            ("fg", self.fg, &mut theme.fg),
            ("muted", self.muted, &mut theme.muted),
            ("accent", self.accent, &mut theme.accent),
            ("error", self.error, &mut theme.error),
            ("border", self.border, &mut theme.border),
            ("input_bg", self.input_bg, &mut theme.input_bg),
            ("header_bg", self.header_bg, &mut theme.header_bg),
            ("row_bg", self.row_bg, &mut theme.row_bg),
            ("row_alt", self.row_alt, &mut theme.row_alt),
            ("overlay_bg", self.overlay_bg, &mut theme.overlay_bg),
        ];

        for (token, value, slot) in slots {
            if let Some(value) = value {
                *slot = Color::from_str(&value)
                    .map_err(|_| ThemeError::InvalidColor { token, value })?;
            }
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(true).name, "dark");
        assert_eq!(Theme::for_mode(false).name, "light");
    }

    #[test]
    fn test_overrides_apply() {
        let theme = Theme::dark()
            .with_overrides_json(r##"{ "accent": "#22c55e", "muted": "gray" }"##)
            .unwrap();
        assert_eq!(theme.accent, Color::Rgb(0x22, 0xc5, 0x5e));
        assert_eq!(theme.muted, Color::Gray);
        assert_eq!(theme.fg, Theme::dark().fg);
    }

    #[test]
    fn test_overrides_reject_bad_color() {
        let err = Theme::light()
            .with_overrides_json(r#"{ "accent": "not-a-color" }"#)
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { token: "accent", .. }));
    }

    #[test]
    fn test_overrides_reject_unknown_token() {
        let err = Theme::light()
            .with_overrides_json(r#"{ "sparkle": "red" }"#)
            .unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }
}
