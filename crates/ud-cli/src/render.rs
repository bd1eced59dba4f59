//! Plain-text rendering of the visible table page.

use ud_table::Page;

const COLUMNS: [&str; 6] = ["#", "Email", "Phone Number", "Firstname", "Lastname", "Role"];

/// Render one visible page as an aligned text table with the row-count
/// footer, mirroring the browser table's layout.
pub fn render_table(page: &Page, current_page: usize, matching: usize) -> String {
    let rows: Vec<[String; 6]> = page
        .records
        .iter()
        .map(|user| {
            [
                user.display_index.to_string(),
                user.email.clone(),
                user.phone_number.clone(),
                user.first_name.clone(),
                user.last_name.clone(),
                user.role.display_name(),
            ]
        })
        .collect();

    // Column widths: header or widest cell.
    let mut widths: Vec<usize> = COLUMNS.iter().map(|header| header.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&COLUMNS.map(String::from), &widths));
    output.push('\n');
    output.push_str(&"-".repeat(widths.iter().sum::<usize>() + 3 * (COLUMNS.len() - 1)));
    output.push('\n');

    for row in &rows {
        output.push_str(&format_row(row, &widths));
        output.push('\n');
    }

    output.push_str(&format!(
        "{} of {} row(s) displayed. Page {} of {}.",
        page.records.len(),
        matching,
        current_page,
        page.total_pages
    ));

    output
}

fn format_row(cells: &[String; 6], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
