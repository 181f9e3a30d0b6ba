use colored::Colorize;
use roster::model::Employee;
use roster::query::Page;
use roster::validate::ValidationReport;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["ID", "NAME", "EMAIL", "DEPARTMENT", "ROLE"];

pub(super) fn print_page(page: &Page) {
    if page.employees.is_empty() {
        println!("No employees found.");
        print_footer(page);
        return;
    }

    let rows: Vec<[String; 5]> = page
        .employees
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.full_name(),
                e.email.clone(),
                e.department.clone(),
                e.role.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header = format_row(&HEADERS.map(String::from), &widths);
    println!("{}", header.bold());
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
    print_footer(page);
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Pad by display width, not byte length.
        let pad = width.saturating_sub(cell.width());
        line.push_str(&" ".repeat(pad));
    }
    line.trim_end().to_string()
}

fn print_footer(page: &Page) {
    let meta = &page.pagination;
    let footer = format!(
        "Page {} of {} · {} employee{} ({} per page)",
        meta.current_page,
        meta.total_pages,
        meta.total_items,
        if meta.total_items == 1 { "" } else { "s" },
        meta.items_per_page,
    );
    println!("{}", footer.dimmed());
}

pub(super) fn print_employee(employee: &Employee) {
    println!(
        "{} {}",
        format!("#{}", employee.id).yellow(),
        employee.full_name().bold()
    );
    println!("  Email:      {}", employee.email);
    println!("  Department: {}", employee.department);
    println!("  Role:       {}", employee.role);
}

pub(super) fn print_values(values: &[String]) {
    if values.is_empty() {
        println!("(none)");
        return;
    }
    for value in values {
        println!("{}", value);
    }
}

pub(super) fn print_report(report: &ValidationReport) {
    if report.is_valid {
        println!("{}", "All fields are valid.".green());
        return;
    }
    for (field, message) in &report.errors {
        println!("{} {}", format!("{}:", field).red(), message);
    }
}
