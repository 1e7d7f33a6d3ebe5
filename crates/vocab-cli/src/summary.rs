//! Progress table for the terminal.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vocab_review::Progress;

/// Progress of a session as a two-column table.
pub fn progress_table(progress: &Progress) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Words"), header_cell("Count")]);
    apply_progress_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Known"),
        count_cell(progress.known, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unknown"),
        count_cell(progress.unknown, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Unseen"), dim_cell(progress.unclassified)]);
    table.add_row(vec![
        Cell::new("Hidden by filter"),
        dim_cell(progress.filtered_out),
    ]);
    table.add_row(vec![
        Cell::new("Left to review"),
        count_cell(progress.remaining, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} ({:.1}% done)",
            progress.total,
            progress.percent_done()
        ))
        .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_progress(name: &str, progress: &Progress) {
    println!("Session: {name}");
    println!("{}", progress_table(progress));
}

fn apply_progress_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_table_lists_every_count() {
        let progress = Progress {
            total: 9,
            known: 2,
            unknown: 1,
            unclassified: 6,
            filtered_out: 4,
            remaining: 3,
        };
        let mut table = progress_table(&progress);
        table.force_no_tty();
        let rendered = table.to_string();

        assert_eq!(table.row_count(), 6);
        assert!(rendered.contains("Hidden by filter"));
        assert!(rendered.contains("9 (33.3% done)"));
    }
}
