use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use aml_core::{ParameterManager, ReferenceIssue};

/// One line of the parameter overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRow {
    pub group: String,
    pub name: String,
    pub param_type: String,
    /// Declared defaults, or the internal default in angle brackets.
    pub default: String,
    pub options: String,
    pub brief: String,
}

pub fn parameter_rows(apm: &ParameterManager) -> Vec<ParameterRow> {
    let mut rows = Vec::new();
    for group in &apm.application().groups {
        for param in &group.parameters {
            let default = if param.has_defaults() {
                param.default_values.join(", ")
            } else if param.has_internal_default() {
                format!("<{}>", param.internal_default)
            } else {
                String::new()
            };
            let options = param
                .list_options
                .iter()
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            rows.push(ParameterRow {
                group: group.name.clone(),
                name: param.name.clone(),
                param_type: param.param_type.to_string(),
                default,
                options,
                brief: param.brief.clone(),
            });
        }
    }
    rows
}

pub fn print_description(apm: &ParameterManager) {
    println!("Application: {}", apm.program_name());
    println!("Version: {}", apm.version());
    if !apm.brief().is_empty() {
        println!("Brief: {}", apm.brief());
    }
    if !apm.categories().is_empty() {
        println!("Categories: {}", apm.categories().join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Parameter"),
        header_cell("Type"),
        header_cell("Default"),
        header_cell("Options"),
        header_cell("Brief"),
    ]);
    apply_table_style(&mut table);
    for row in parameter_rows(apm) {
        let default = if row.default.starts_with('<') {
            dim_cell(row.default)
        } else {
            Cell::new(row.default)
        };
        table.add_row(vec![
            dim_cell(row.group),
            Cell::new(row.name).add_attribute(Attribute::Bold),
            Cell::new(row.param_type),
            default,
            Cell::new(row.options),
            Cell::new(row.brief),
        ]);
    }
    println!("{table}");
}

pub fn print_issues(issues: &[ReferenceIssue]) {
    if issues.is_empty() {
        println!("References: ok");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for (index, issue) in issues.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(issue.to_string()).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
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
