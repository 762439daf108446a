use serde::Deserialize;

/// Visual design tokens for the site.
///
/// The theme is the single source of truth for colors, type, and spacing.
/// Components never carry literal style values; they read tokens through
/// the page context, so swapping the [`Theme`] restyles the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Name used in startup diagnostics when themes are swapped.
    pub name: String,
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
}

/// Color tokens. Values are CSS colors (`#rrggbb`, named, or functional).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Brand color; the header brand label renders in this.
    pub primary: String,
    /// Supporting color for section headings.
    pub secondary: String,
    /// Accent color for the header tagline.
    pub accent: String,
    /// Page background.
    pub surface: String,
    /// Default text color.
    pub ink: String,
}

/// Typography tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub heading_size: String,
    pub body_size: String,
}

/// Layout rhythm tokens. Values are CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Height of the fixed header bar.
    pub bar_height: String,
    /// Horizontal padding of the header and sections.
    pub gutter: String,
    /// Vertical padding around section content.
    pub section_gap: String,
}

// --- Default ---

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "safebuy".to_owned(),
            palette: Palette::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1a7f5a".to_owned(),
            secondary: "#475569".to_owned(),
            accent: "#f59e0b".to_owned(),
            surface: "#ffffff".to_owned(),
            ink: "#1f2937".to_owned(),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Poppins, 'Helvetica Neue', Arial, sans-serif".to_owned(),
            heading_size: "2rem".to_owned(),
            body_size: "1rem".to_owned(),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            bar_height: "64px".to_owned(),
            gutter: "24px".to_owned(),
            section_gap: "96px".to_owned(),
        }
    }
}
