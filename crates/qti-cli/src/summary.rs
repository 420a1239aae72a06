use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use qti_cli::types::ConversionResult;

pub fn print_summary(result: &ConversionResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.manifest {
        println!("Manifest: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Item"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    let written_status = if result.dry_run { "PLANNED" } else { "WRITTEN" };
    for item in &result.items {
        table.add_row(vec![
            Cell::new(item.row),
            item_cell(&item.entry.identifier),
            Cell::new(written_status).fg(Color::Green),
            Cell::new(&item.entry.href),
        ]);
    }
    for failed in &result.failed {
        table.add_row(vec![
            Cell::new(failed.row),
            item_cell(&failed.identifier),
            Cell::new("FAILED")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(&failed.message),
        ]);
    }
    for skipped in &result.skipped {
        let missing = skipped
            .missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(skipped.row),
            dim_cell("-"),
            Cell::new("SKIPPED").fg(Color::Yellow),
            Cell::new(format!("missing {missing}: {}", skipped.record)),
        ]);
    }
    table.add_row(vec![
        Cell::new(result.rows_read).add_attribute(Attribute::Bold),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} items, {} skipped, {} failed",
            result.items.len(),
            result.skipped.len(),
            result.failed.len()
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.has_errors() {
        eprintln!("Errors:");
        for failed in &result.failed {
            eprintln!("- {}", failed.message);
        }
    }
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!(
            "QTI files and manifest generated in {}",
            result.output_dir.display()
        );
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::UpperBoundary(Width::Percentage(65)),
    ]);
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

fn item_cell(identifier: &str) -> Cell {
    Cell::new(identifier)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
