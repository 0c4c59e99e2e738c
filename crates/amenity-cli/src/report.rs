//! Rendering analysis results as terminal tables or JSON.

use std::fmt::Write as _;

use amenity_model::{AmenityAnalysis, Group, Suggestion, UnmatchedGroup};
use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// Coverage at or above this share is shown as healthy.
const HEALTHY_COVERAGE: f64 = 0.85;

/// A label paired with its normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedLabel {
    pub label: String,
    pub normalized: String,
}

/// Hint text for an unmatched amenity, or `None` without a suggestion.
pub fn format_suggestion(suggestion: Option<&Suggestion>) -> Option<String> {
    let suggestion = suggestion?;
    Some(format!(
        "Closest match: \"{}\" ({}% similarity)",
        suggestion.display(),
        suggestion.percent()
    ))
}

/// All spellings of a group when it has more than one.
pub fn variations(group: &Group) -> Option<String> {
    (group.variants.len() > 1).then(|| group.variants.join(", "))
}

/// Spellings after the first, for duplicate listings.
pub fn repeated_spellings(group: &Group) -> String {
    group.variants.iter().skip(1).cloned().collect::<Vec<_>>().join(", ")
}

pub fn render_json(analysis: &AmenityAnalysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("serialize analysis")
}

pub fn render_tables(analysis: &AmenityAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Coverage snapshot:");
    let _ = writeln!(out, "{}", coverage_table(analysis));

    write_unmatched(
        &mut out,
        "Missing from Amber",
        "All PMG amenities are represented on Amber.",
        "PMG variations",
        &analysis.missing_from_amber,
    );
    write_unmatched(
        &mut out,
        "Unexpected on Amber",
        "Amber amenities all map back to PMG.",
        "Amber variations",
        &analysis.unexpected_in_amber,
    );
    write_duplicates(&mut out, analysis);
    write_typos(&mut out, analysis);
    out
}

pub fn render_normalized(rows: &[NormalizedLabel]) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Normalized key")]);
    apply_table_style(&mut table);
    for row in rows {
        let key = if row.normalized.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(&row.normalized)
        };
        table.add_row(vec![Cell::new(&row.label), key]);
    }
    table.to_string()
}

fn coverage_table(analysis: &AmenityAnalysis) -> Table {
    let totals = &analysis.totals;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("PMG total entries"), Cell::new(totals.pmg_total)]);
    table.add_row(vec![
        Cell::new("Amber total entries"),
        Cell::new(totals.amber_total),
    ]);
    table.add_row(vec![Cell::new("Unique PMG"), Cell::new(totals.pmg_unique)]);
    table.add_row(vec![Cell::new("Unique Amber"), Cell::new(totals.amber_unique)]);
    table.add_row(vec![Cell::new("Exact overlaps"), Cell::new(totals.overlap)]);
    let coverage_color = if totals.coverage > HEALTHY_COVERAGE {
        Color::Green
    } else {
        Color::Yellow
    };
    table.add_row(vec![
        Cell::new("Coverage").add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", totals.coverage_percent()))
            .fg(coverage_color)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn write_unmatched(
    out: &mut String,
    title: &str,
    empty_message: &str,
    variations_label: &str,
    items: &[UnmatchedGroup],
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title} ({} issues):", items.len());
    if items.is_empty() {
        let _ = writeln!(out, "  {empty_message}");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Amenity"),
        header_cell(variations_label),
        header_cell("Suggestion"),
    ]);
    apply_table_style(&mut table);
    for item in items {
        table.add_row(vec![
            Cell::new(item.display()).add_attribute(Attribute::Bold),
            variations(&item.group).map_or_else(|| dim_cell("-"), Cell::new),
            format_suggestion(item.suggestion.as_ref()).map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    let _ = writeln!(out, "{table}");
}

fn write_duplicates(out: &mut String, analysis: &AmenityAnalysis) {
    let count = analysis.duplicates_in_pmg.len() + analysis.duplicates_in_amber.len();
    let _ = writeln!(out);
    let _ = writeln!(out, "Duplicate entries ({count} issues):");
    if count == 0 {
        let _ = writeln!(out, "  No duplicates were detected.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Catalog"),
        header_cell("Amenity"),
        header_cell("Count"),
        header_cell("Duplicates"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let rows = analysis
        .duplicates_in_pmg
        .iter()
        .map(|group| ("PMG", group))
        .chain(analysis.duplicates_in_amber.iter().map(|group| ("Amber", group)));
    for (catalog, group) in rows {
        table.add_row(vec![
            Cell::new(catalog).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(group.display()),
            Cell::new(group.count).fg(Color::Red),
            Cell::new(repeated_spellings(group)),
        ]);
    }
    let _ = writeln!(out, "{table}");
}

fn write_typos(out: &mut String, analysis: &AmenityAnalysis) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Spelling & naming suggestions (by similarity):");
    if analysis.potential_typos.is_empty() {
        let _ = writeln!(out, "  No near matches found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Match"),
        header_cell("Entry"),
        header_cell("Suggested match"),
        header_cell("Distance"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for typo in &analysis.potential_typos {
        table.add_row(vec![
            dim_cell(typo.direction.describe()),
            Cell::new(format!("{}%", typo.percent())).fg(Color::Cyan),
            Cell::new(&typo.source).add_attribute(Attribute::Bold),
            Cell::new(&typo.target),
            Cell::new(typo.distance),
        ]);
    }
    let _ = writeln!(out, "{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
