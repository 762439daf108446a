use safebuy_domain::theme::Theme;
use thiserror::Error;

/// Errors raised when a theme token fails validation.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("style token `{token}` rejected: {value:?} ({reason})")]
    Rejected { token: &'static str, value: String, reason: &'static str },
}

/// Utilities for safe style token handling.
///
/// Theme tokens arrive from configuration files and environment variables
/// and end up inside a `<style>` element, so every value is vetted against
/// a conservative CSS charset before any markup is produced. The checks are
/// deliberately strict; a rejected theme fails startup instead of shipping
/// a page with a broken or unsafe stylesheet.
#[derive(Debug)]
pub struct StyleGuard;

const COLOR_EXTRA: &[char] = &['(', ')', ',', '.', '%', ' ', '-'];
const FONT_EXTRA: &[char] = &[' ', ',', '\'', '-'];
const LENGTH_UNITS: &[&str] = &["px", "rem", "em", "vh", "vw", "%"];

impl StyleGuard {
    /// Validates a color token (`#rgb`/`#rrggbb` forms, named colors, or
    /// functional notation like `rgb(...)`).
    ///
    /// # Errors
    /// Returns an error if the value is empty or contains characters that
    /// have no business in a CSS color.
    pub fn verify_color(token: &'static str, value: &str) -> Result<(), StyleError> {
        if value.is_empty() {
            return Err(rejected(token, value, "empty value"));
        }

        if let Some(hex) = value.strip_prefix('#') {
            if !matches!(hex.len(), 3 | 4 | 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(rejected(token, value, "malformed hex color"));
            }
            return Ok(());
        }

        if value.chars().all(|c| c.is_ascii_alphanumeric() || COLOR_EXTRA.contains(&c)) {
            Ok(())
        } else {
            Err(rejected(token, value, "unexpected characters in color"))
        }
    }

    /// Validates a length token (`64px`, `1.5rem`, `100%`, or bare `0`).
    ///
    /// # Errors
    /// Returns an error for unknown units or a non-numeric magnitude.
    pub fn verify_length(token: &'static str, value: &str) -> Result<(), StyleError> {
        if value == "0" {
            return Ok(());
        }

        let Some(magnitude) =
            LENGTH_UNITS.iter().find_map(|unit| value.strip_suffix(unit))
        else {
            return Err(rejected(token, value, "unknown length unit"));
        };

        match magnitude.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
            _ => Err(rejected(token, value, "malformed length magnitude")),
        }
    }

    /// Validates a font family list, e.g. `Poppins, 'Helvetica Neue', sans-serif`.
    ///
    /// # Errors
    /// Returns an error if the list is empty or contains characters outside
    /// the conservative font-family charset.
    pub fn verify_font(token: &'static str, value: &str) -> Result<(), StyleError> {
        if value.trim().is_empty() {
            return Err(rejected(token, value, "empty font family"));
        }

        if value.chars().all(|c| c.is_ascii_alphanumeric() || FONT_EXTRA.contains(&c)) {
            Ok(())
        } else {
            Err(rejected(token, value, "unexpected characters in font family"))
        }
    }

    /// Validates every token of a [`Theme`] before it reaches a stylesheet.
    ///
    /// # Errors
    /// Returns the first rejected token.
    pub fn verify_theme(theme: &Theme) -> Result<(), StyleError> {
        Self::verify_color("palette.primary", &theme.palette.primary)?;
        Self::verify_color("palette.secondary", &theme.palette.secondary)?;
        Self::verify_color("palette.accent", &theme.palette.accent)?;
        Self::verify_color("palette.surface", &theme.palette.surface)?;
        Self::verify_color("palette.ink", &theme.palette.ink)?;

        Self::verify_font("typography.font_family", &theme.typography.font_family)?;
        Self::verify_length("typography.heading_size", &theme.typography.heading_size)?;
        Self::verify_length("typography.body_size", &theme.typography.body_size)?;

        Self::verify_length("spacing.bar_height", &theme.spacing.bar_height)?;
        Self::verify_length("spacing.gutter", &theme.spacing.gutter)?;
        Self::verify_length("spacing.section_gap", &theme.spacing.section_gap)?;

        Ok(())
    }
}

fn rejected(token: &'static str, value: &str, reason: &'static str) -> StyleError {
    StyleError::Rejected { token, value: value.to_owned(), reason }
}
