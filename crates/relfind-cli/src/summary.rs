use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use relfind_cli::pipeline::{ProductRow, SearchReport};

pub fn print_search_table(report: &SearchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product"),
        header_cell("Operators"),
        header_cell("Matched"),
        header_cell("Closest releases"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.rows {
        table.add_row(product_row(row));
    }
    let summary = &report.summary;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_operators).add_attribute(Attribute::Bold),
        Cell::new(summary.matched_releases).add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} resolved, {} unresolved",
            summary.resolved_products, summary.unresolved_products
        )),
    ]);
    println!("{table}");
    if !report.unmapped_operators.is_empty() {
        println!("Unmapped operators:");
        for operator in &report.unmapped_operators {
            println!("- {operator}");
        }
    }
}

fn product_row(row: &ProductRow) -> Vec<Cell> {
    match row.matched {
        Some(matched) => vec![
            Cell::new(&row.product),
            Cell::new(row.operators),
            Cell::new(matched).fg(Color::Green),
            Cell::new(&row.detail),
        ],
        None => vec![
            Cell::new(&row.product),
            Cell::new(row.operators),
            dim_cell("-"),
            Cell::new(&row.detail).fg(Color::Yellow),
        ],
    }
}

pub fn print_products(products: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Product"), header_cell("Releases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (product, count) in products {
        table.add_row(vec![Cell::new(product), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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
