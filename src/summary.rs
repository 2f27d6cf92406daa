//! Build summary and pricing output.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::build_state::BuildState;
use crate::types::CATEGORY_ORDER;

/// Format whole rupees with Indian digit grouping, e.g. `₹1,23,456`.
///
/// The last three digits form one group; everything above is grouped in
/// pairs.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && i % 2 == lead {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{},{}", grouped, tail)
}

/// One line of the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub category: String,
    pub part_id: String,
    pub name: String,
    pub brand: String,
    pub price: u32,
}

/// Printable view of a finished (or partial) build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub lines: Vec<SummaryLine>,
    pub total: u64,
    pub estimated_draw: u32,
    /// Categories with no selection, in wizard order
    pub missing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl BuildSummary {
    pub fn new(build: &BuildState, advisory: Option<&str>) -> Self {
        let lines = build
            .iter()
            .map(|(category, part)| SummaryLine {
                category: category.to_string(),
                part_id: part.id.clone(),
                name: part.name.clone(),
                brand: part.brand.clone(),
                price: part.price,
            })
            .collect();

        let missing = CATEGORY_ORDER
            .iter()
            .filter(|c| !build.contains(**c))
            .map(|c| c.to_string())
            .collect();

        Self {
            lines,
            total: build.total_price(),
            estimated_draw: build.estimated_draw(),
            missing,
            advisory: advisory.map(str::to_string),
        }
    }

    /// Plain-text rendering used for `summary` output and saved files.
    pub fn to_text(&self) -> String {
        let mut out = String::from("Build Summary\n=============\n\n");

        let name_width = self.lines.iter().map(|l| l.category.len()).max().unwrap_or(0);
        for line in &self.lines {
            out.push_str(&format!(
                "{:<width$}  {} ({})  {}\n",
                line.category,
                line.name,
                line.brand,
                format_inr(u64::from(line.price)),
                width = name_width
            ));
        }
        if !self.missing.is_empty() {
            out.push_str(&format!("\nNot selected: {}\n", self.missing.join(", ")));
        }

        out.push_str(&format!("\nEstimated Total Cost: {}\n", format_inr(self.total)));
        if self.estimated_draw > 0 {
            out.push_str(&format!("Estimated CPU + GPU draw: {}W\n", self.estimated_draw));
        }

        if let Some(ref advisory) = self.advisory {
            out.push_str("\nAI Compatibility Report\n-----------------------\n");
            out.push_str(advisory.trim());
            out.push('\n');
        }
        out
    }

    /// Write the summary as text, or as JSON when the path ends in `.json`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
            serde_json::to_string_pretty(self).context("Failed to serialize summary")?
        } else {
            self.to_text()
        };
        fs::write(path, content)
            .with_context(|| format!("Failed to write summary to {:?}", path))?;
        tracing::info!("Build summary saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_small_amounts() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn test_format_inr_indian_grouping() {
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(28_500), "₹28,500");
        assert_eq!(format_inr(123_456), "₹1,23,456");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_empty_summary_lists_everything_missing() {
        let summary = BuildSummary::new(&BuildState::new(), None);
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.missing.len(), 9);
        assert!(summary.to_text().contains("Estimated Total Cost: ₹0"));
    }
}
