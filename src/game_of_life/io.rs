//! Text input and output for fields and patterns

use super::{Field, Pattern};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a field from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_field_from_file<P: AsRef<Path>>(path: P) -> Result<Field> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read field file: {}", path.as_ref().display()))?;

    parse_field_from_string(&content)
        .with_context(|| format!("Failed to parse field from file: {}", path.as_ref().display()))
}

/// Parse a field from a string representation
pub fn parse_field_from_string(content: &str) -> Result<Field> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Field file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Field::from_rows(rows).context("All rows must have the same length")
}

/// Convert a field to string representation
pub fn field_to_string(field: &Field) -> String {
    let mut result = String::with_capacity(field.rows() * (field.columns() + 1));

    for row in 0..field.rows() {
        for column in 0..field.columns() {
            result.push(if field.get(row, column) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Load a pattern from a plaintext file. The file stem names the pattern
/// unless the file carries a `!Name:` comment.
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    let pattern = Pattern::parse(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.display()))?;

    let stem = path.file_stem().and_then(|s| s.to_str());
    match stem {
        Some(stem) if pattern.name.is_none() => Ok(pattern.with_name(stem)),
        _ => Ok(pattern),
    }
}
