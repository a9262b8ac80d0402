//! Rendering of the A–G class scale.

use super::summary::{ansi_color, class_color};
use super::{ReportError, ReportFormat};
use crate::scoring::DpeClass;
use std::fmt::Write as _;

/// Render the class thresholds in the given format.
pub fn render_scale(format: ReportFormat, colored: bool) -> Result<String, ReportError> {
    let bands = DpeClass::scale();
    let mut out = String::new();
    match format {
        ReportFormat::Summary => {
            writeln!(out, "{}", ansi_color("DPE class scale (kWh/m²/year)", "bold", colored))?;
            for band in &bands {
                writeln!(
                    out,
                    "  {}  {:<9} {}",
                    ansi_color(band.class.letter(), class_color(band.class), colored),
                    band.label,
                    band.description
                )?;
            }
        }
        ReportFormat::Markdown => {
            writeln!(out, "| Class | kWh/m²/year | Meaning |")?;
            writeln!(out, "|-------|-------------|---------|")?;
            for band in &bands {
                writeln!(out, "| {} | {} | {} |", band.class, band.label, band.description)?;
            }
        }
        ReportFormat::Json => {
            out = serde_json::to_string_pretty(&bands)
                .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        }
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_scale_lists_every_class() {
        let text = render_scale(ReportFormat::Summary, false).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("  A  ≤ 70"));
        assert!(text.contains("  G  > 420"));
    }

    #[test]
    fn test_json_scale() {
        let json = render_scale(ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(7));
        assert_eq!(value[6]["max"], serde_json::Value::Null);
        assert_eq!(value[3]["label"], "181–250");
    }

    #[test]
    fn test_markdown_scale() {
        let md = render_scale(ReportFormat::Markdown, false).unwrap();
        assert!(md.contains("| C | 111–180 |"));
    }
}
