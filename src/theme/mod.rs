//! Theme context.
//!
//! Explicitly constructed at the application root and read through
//! accessors; no ambient global state. The grid only consumes the highlight
//! color (today ring, selection borders, new-holiday styling) and the
//! derived contrast colors.

/// User-selectable accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandColor {
    #[default]
    Blue,
    Yellow,
    Green,
    Red,
}

impl BrandColor {
    pub const ALL: [BrandColor; 4] = [
        BrandColor::Blue,
        BrandColor::Yellow,
        BrandColor::Green,
        BrandColor::Red,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            BrandColor::Blue => "#36C5F0",
            BrandColor::Yellow => "#ECB22E",
            BrandColor::Green => "#2EB67D",
            BrandColor::Red => "#E01E5A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Read/write theme state with derived colors per mode.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    current_color: BrandColor,
    mode: ThemeMode,
}

impl ThemeContext {
    pub fn new(color: BrandColor, mode: ThemeMode) -> Self {
        Self {
            current_color: color,
            mode,
        }
    }

    /// Default brand color, mode detected from the OS preference.
    pub fn from_system() -> Self {
        let mode = match dark_light::detect() {
            dark_light::Mode::Light => ThemeMode::Light,
            dark_light::Mode::Dark | dark_light::Mode::Default => ThemeMode::Dark,
        };
        Self::new(BrandColor::default(), mode)
    }

    pub fn current_color(&self) -> BrandColor {
        self.current_color
    }

    pub fn set_current_color(&mut self, color: BrandColor) {
        self.current_color = color;
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    /// The active highlight color as a hex token.
    pub fn highlight_hex(&self) -> &'static str {
        self.current_color.hex()
    }

    pub fn text_color(&self) -> &'static str {
        if self.is_dark_mode() {
            "#ffffff"
        } else {
            "#000000"
        }
    }

    pub fn bg_color(&self) -> &'static str {
        if self.is_dark_mode() {
            "#1A1D21"
        } else {
            "#ffffff"
        }
    }

    pub fn surface_color(&self) -> &'static str {
        if self.is_dark_mode() {
            "#222529"
        } else {
            "#fafafa"
        }
    }

    /// Background for days inside the viewed month.
    pub fn in_month_color(&self) -> &'static str {
        self.bg_color()
    }

    /// Background for the leading/trailing days borrowed from neighbours.
    pub fn out_month_color(&self) -> &'static str {
        self.surface_color()
    }

    /// Hover wash, a constant light blue regardless of theme.
    pub fn hover_color(&self) -> &'static str {
        "#36C5F030"
    }

    /// Contrast text inside the today ring, the opposite of the theme text.
    pub fn today_text_color(&self) -> &'static str {
        if self.is_dark_mode() {
            "#1A1D21"
        } else {
            "#ffffff"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(BrandColor::Blue, "#36C5F0")]
    #[test_case(BrandColor::Yellow, "#ECB22E")]
    #[test_case(BrandColor::Green, "#2EB67D")]
    #[test_case(BrandColor::Red, "#E01E5A")]
    fn test_brand_color_hex(color: BrandColor, expected: &str) {
        assert_eq!(color.hex(), expected);
    }

    #[test]
    fn test_toggle_mode_swaps_derived_colors() {
        let mut theme = ThemeContext::new(BrandColor::Blue, ThemeMode::Dark);
        assert_eq!(theme.bg_color(), "#1A1D21");
        assert_eq!(theme.text_color(), "#ffffff");
        assert_eq!(theme.today_text_color(), "#1A1D21");

        theme.toggle_mode();
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.bg_color(), "#ffffff");
        assert_eq!(theme.text_color(), "#000000");
        assert_eq!(theme.today_text_color(), "#ffffff");
    }

    #[test]
    fn test_hover_color_is_theme_independent() {
        let dark = ThemeContext::new(BrandColor::Red, ThemeMode::Dark);
        let light = ThemeContext::new(BrandColor::Red, ThemeMode::Light);
        assert_eq!(dark.hover_color(), light.hover_color());
    }

    #[test]
    fn test_highlight_follows_current_color() {
        let mut theme = ThemeContext::default();
        assert_eq!(theme.highlight_hex(), "#36C5F0");
        theme.set_current_color(BrandColor::Green);
        assert_eq!(theme.highlight_hex(), "#2EB67D");
    }
}
