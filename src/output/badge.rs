use std::fmt::Write;

/// Flat SVG conformity badge, shields.io style.
pub struct BadgeRenderer {
    label: String,
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: "a11y".to_string(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    fn color_for(conformity: f64) -> &'static str {
        if conformity >= 90.0 {
            "#4c1" // green
        } else if conformity >= 70.0 {
            "#dfb317" // yellow
        } else if conformity >= 50.0 {
            "#fe7d37" // orange
        } else {
            "#e05d44" // red
        }
    }

    // Approximate glyph width for Verdana 11px; good enough for a badge.
    #[allow(clippy::cast_precision_loss)]
    fn text_width(text: &str) -> f64 {
        text.chars().count() as f64 * 6.5 + 10.0
    }

    #[must_use]
    #[allow(clippy::missing_panics_doc)] // writing to a String cannot fail
    pub fn render(&self, conformity_percent: f64) -> String {
        let value = format!("{conformity_percent:.1}%");
        let label_width = Self::text_width(&self.label);
        let value_width = Self::text_width(&value);
        let total_width = label_width + value_width;
        let color = Self::color_for(conformity_percent);

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width:.0}" height="20" role="img" aria-label="{label}: {value}">"#,
            label = self.label,
        )
        .ok();
        writeln!(svg, r#"  <title>{label}: {value}</title>"#, label = self.label).ok();
        writeln!(
            svg,
            r##"  <rect width="{label_width:.0}" height="20" fill="#555"/>"##
        )
        .ok();
        writeln!(
            svg,
            r#"  <rect x="{label_width:.0}" width="{value_width:.0}" height="20" fill="{color}"/>"#
        )
        .ok();
        writeln!(
            svg,
            r##"  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,sans-serif" font-size="11">"##
        )
        .ok();
        writeln!(
            svg,
            r#"    <text x="{x:.0}" y="14">{label}</text>"#,
            x = label_width / 2.0,
            label = self.label,
        )
        .ok();
        writeln!(
            svg,
            r#"    <text x="{x:.0}" y="14">{value}</text>"#,
            x = label_width + value_width / 2.0,
        )
        .ok();
        writeln!(svg, "  </g>").ok();
        writeln!(svg, "</svg>").ok();
        svg
    }
}

#[cfg(test)]
#[path = "badge_tests.rs"]
mod tests;
