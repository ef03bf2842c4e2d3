//! Stacked bar chart for the terminal
//!
//! One horizontal bar per month. Each bar is split into segments in schedule
//! order, one glyph per category, followed by the unrecognized segment.

use crate::models::{Amount, BudgetSchedule, MonthlySummary};

/// Segment glyphs, assigned to categories in schedule order
const GLYPHS: [char; 8] = ['█', '▓', '▒', '░', '#', '=', '+', '*'];

/// Glyph for the unrecognized bucket
const UNRECOGNIZED_GLYPH: char = '?';

fn glyph_for(index: usize) -> char {
    GLYPHS[index % GLYPHS.len()]
}

/// Render the monthly rows as a stacked bar chart
///
/// The month with the largest total gets a bar `width` characters long;
/// the others scale to it. Negative amounts are drawn as zero.
pub fn render_stacked_chart(
    rows: &[MonthlySummary],
    schedule: &BudgetSchedule,
    width: usize,
    currency_symbol: &str,
) -> String {
    let width = width.max(1);
    let scale_max = rows
        .iter()
        .map(drawn_total)
        .max()
        .unwrap_or(0);

    let mut output = String::new();

    for row in rows {
        let bar = if scale_max == 0 {
            String::new()
        } else {
            render_bar(row, width, scale_max)
        };
        let label = format!("{}월", row.month);
        output.push_str(&format!(
            "{:>4} │{} {}\n",
            label,
            bar,
            row.total.format_with_symbol(currency_symbol)
        ));
    }

    output.push('\n');
    output.push_str(&render_legend(rows, schedule));
    output
}

/// Segment sizes in stacking order, with negatives clamped
fn segments(row: &MonthlySummary) -> impl Iterator<Item = (char, i128)> + '_ {
    row.categories
        .iter()
        .enumerate()
        .map(|(i, c)| (glyph_for(i), clamp(c.amount)))
        .chain(std::iter::once((UNRECOGNIZED_GLYPH, clamp(row.unrecognized))))
}

fn clamp(amount: Amount) -> i128 {
    i128::from(amount.units().max(0))
}

fn drawn_total(row: &MonthlySummary) -> i128 {
    segments(row).map(|(_, v)| v).sum()
}

/// Draw one bar; segment boundaries are rounded from cumulative sums so the
/// bar length never drifts from the rounded total
fn render_bar(row: &MonthlySummary, width: usize, scale_max: i128) -> String {
    let width = width as i128;
    let mut bar = String::new();
    let mut cumulative = 0i128;
    let mut drawn = 0i128;

    for (glyph, value) in segments(row) {
        cumulative += value;
        let end = (cumulative * width + scale_max / 2) / scale_max;
        for _ in drawn..end {
            bar.push(glyph);
        }
        drawn = end;
    }

    bar
}

fn render_legend(rows: &[MonthlySummary], schedule: &BudgetSchedule) -> String {
    let mut output = String::from("Legend:\n");

    for (i, category) in schedule.categories().iter().enumerate() {
        output.push_str(&format!(
            "  {} {} (budget {})\n",
            glyph_for(i),
            category.name,
            category.ceiling
        ));
    }

    if rows.iter().any(|r| !r.unrecognized.is_zero()) {
        output.push_str(&format!("  {} unrecognized\n", UNRECOGNIZED_GLYPH));
    }

    output
}
