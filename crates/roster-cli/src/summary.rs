use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_analytics::{cost_per_experience_year, is_degenerate, total_cost};
use roster_model::{EmployeeRecord, RowRejection};

/// Accepted records with their derived costs.
pub fn roster_table(records: &[EmployeeRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Department"),
        header_cell("Salary"),
        header_cell("Experience"),
        header_cell("Total cost"),
        header_cell("Cost / year"),
    ]);
    apply_roster_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut grand_total = 0.0;
    for record in records {
        let cost = total_cost(record.salary);
        grand_total += cost;
        let efficiency = if is_degenerate(record) {
            dim_cell("-")
        } else {
            Cell::new(money(cost_per_experience_year(
                record.salary,
                record.experience_years,
            )))
        };
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.department).fg(Color::Blue),
            Cell::new(money(record.salary)),
            Cell::new(record.experience_years),
            Cell::new(money(cost)),
            efficiency,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} record(s)", records.len())),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(money(grand_total)).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Rejected rows, one per line number.
pub fn rejection_table(warnings: &[RowRejection]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Reason"),
        header_cell("Row"),
    ]);
    apply_roster_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for warning in warnings {
        table.add_row(vec![
            Cell::new(warning.line).fg(Color::Yellow),
            Cell::new(&warning.reason),
            dim_cell(&warning.row),
        ]);
    }
    table
}

fn apply_roster_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn money(value: f64) -> String {
    format!("R$ {value:.2}")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
