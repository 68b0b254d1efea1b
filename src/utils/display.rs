//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{field_to_string, CellUpdate, Field};
use crate::simulation::GenerationReport;
use anyhow::Result;
use itertools::Itertools;
use serde_json::json;

/// Format fields and update batches for display
pub struct FieldFormatter;

impl FieldFormatter {
    /// Format a field in compact form
    pub fn format_field_compact(field: &Field) -> String {
        let mut output = String::new();
        for row in 0..field.rows() {
            for column in 0..field.columns() {
                output.push(if field.get(row, column) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a field with coordinates
    pub fn format_field_with_coords(field: &Field) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for column in 0..field.columns() {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..field.rows() {
            output.push_str(&format!("{:2} ", row));
            for column in 0..field.columns() {
                output.push_str(if field.get(row, column) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Summarize an update batch as births and deaths
    pub fn format_updates(updates: &[CellUpdate]) -> String {
        let (born, died): (Vec<_>, Vec<_>) = updates.iter().partition(|update| update.alive);
        let positions = |batch: &[&CellUpdate]| {
            batch
                .iter()
                .map(|update| format!("({}, {})", update.row, update.column))
                .join(" ")
        };

        format!(
            "+{} -{}\n  born: {}\n  died: {}\n",
            born.len(),
            died.len(),
            positions(&born),
            positions(&died)
        )
    }

    /// Render the final field and its history in the given output format
    pub fn format_run(
        field: &Field,
        reports: &[GenerationReport],
        format: OutputFormat,
        show_generations: bool,
    ) -> Result<String> {
        let output = match format {
            OutputFormat::Text => field_to_string(field),
            OutputFormat::Json => {
                let summary = json!({
                    "rows": field.rows(),
                    "columns": field.columns(),
                    "generations": reports.len(),
                    "living_cells": field.living_count(),
                    "cells": field.living_cells(),
                    "history": if show_generations { Some(reports) } else { None },
                });
                serde_json::to_string_pretty(&summary)?
            }
            OutputFormat::Visual => {
                let mut output = String::new();
                if show_generations {
                    for report in reports {
                        output.push_str(&format!(
                            "Generation {} (Living: {}): {}",
                            report.generation,
                            report.living_cells,
                            Self::format_updates(&report.updates)
                        ));
                    }
                    output.push('\n');
                }
                output.push_str(&Self::format_field_with_coords(field));
                output
            }
        };

        Ok(output)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field() -> Field {
        let mut field = Field::new(3, 3);
        for (row, column) in [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)] {
            field.flip_cell(row, column);
        }
        field
    }

    #[test]
    fn test_field_formatting() {
        let field = sample_field();

        let compact = FieldFormatter::format_field_compact(&field);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = FieldFormatter::format_field_with_coords(&field);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_format_updates() {
        let updates = [
            CellUpdate::new(0, 1, true),
            CellUpdate::new(1, 1, false),
            CellUpdate::new(2, 1, true),
        ];
        let summary = FieldFormatter::format_updates(&updates);
        assert!(summary.starts_with("+2 -1\n"));
        assert!(summary.contains("born: (0, 1) (2, 1)"));
        assert!(summary.contains("died: (1, 1)"));
    }

    #[test]
    fn test_format_run_json() {
        let field = sample_field();
        let reports = vec![GenerationReport {
            generation: 1,
            updates: vec![CellUpdate::new(1, 1, true)],
            living_cells: 5,
        }];

        let json = FieldFormatter::format_run(&field, &reports, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["living_cells"], 5);
        assert_eq!(value["history"][0]["updates"][0]["row"], 1);

        let text = FieldFormatter::format_run(&field, &reports, OutputFormat::Text, false).unwrap();
        assert_eq!(text, "101\n010\n101\n");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Yellow);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
