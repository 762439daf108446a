use safebuy_domain::theme::Theme;

/// Builds the page stylesheet from theme tokens.
///
/// Pure string assembly. Tokens are validated by the style guard before
/// this runs, and identical themes produce identical CSS. Every color,
/// font and length below comes from the [`Theme`]; components carry no
/// style literals of their own.
#[must_use]
pub fn stylesheet(theme: &Theme) -> String {
    let palette = &theme.palette;
    let typography = &theme.typography;
    let spacing = &theme.spacing;

    format!(
        "\
body {{
  margin: 0;
  background: {surface};
  color: {ink};
  font-family: {font};
  font-size: {body_size};
}}
.sb-header {{
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: {bar};
  display: flex;
  align-items: center;
  gap: {gutter};
  padding: 0 {gutter};
  background: {surface};
}}
.sb-header-brand {{
  font-weight: 700;
}}
.sb-header-nav {{
  margin-left: auto;
}}
.sb-nav-link {{
  color: {primary};
  text-decoration: none;
  font-weight: 600;
}}
.sb-main {{
  padding-top: calc({bar} + {gutter});
}}
.sb-section {{
  padding: {section_gap} {gutter};
  scroll-margin-top: calc({bar} + {gutter});
}}
.sb-section-heading {{
  font-size: {heading};
  margin: 0 0 {gutter} 0;
}}
.sb-section-copy {{
  margin: 0;
}}
.sb-footer {{
  padding: {gutter};
  text-align: center;
}}
",
        surface = palette.surface,
        ink = palette.ink,
        primary = palette.primary,
        font = typography.font_family,
        body_size = typography.body_size,
        heading = typography.heading_size,
        bar = spacing.bar_height,
        gutter = spacing.gutter,
        section_gap = spacing.section_gap,
    )
}
