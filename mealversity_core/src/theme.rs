//! Light/dark presentation flag.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        tracing::debug!(theme = self.color_scheme(), "theme toggled");
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value for the root element's `color-scheme` style.
    pub fn color_scheme(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class toggled on the document root while dark mode is on.
    pub const ROOT_CLASS: &'static str = "dark";

    /// Toggle button glyph: offer the other mode.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut theme = Theme::default();
        assert!(!theme.is_dark());
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.color_scheme(), "dark");
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }
}
