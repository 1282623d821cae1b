//! Plain-text allocation tables.

use super::ParsedProblem;
use crate::constructive::MethodResult;
use crate::models::Allocation;

/// Renders an allocation as a right-aligned table with node labels.
///
/// Missing labels fall back to `S{i}` / `D{j}`.
///
/// # Examples
///
/// ```
/// use u_transport::io::render_allocation;
/// use u_transport::models::Allocation;
///
/// let a = Allocation::from_rows(vec![vec![10.0, 10.0], vec![0.0, 30.0]]).unwrap();
/// let table = render_allocation(&a, &["A".into(), "B".into()], &["X".into(), "Y".into()]);
/// assert_eq!(table, "    X   Y\nA  10  10\nB   0  30\n");
/// ```
pub fn render_allocation(
    allocation: &Allocation,
    source_names: &[String],
    destination_names: &[String],
) -> String {
    let row_labels: Vec<String> = (0..allocation.rows())
        .map(|i| label(source_names, i, 'S'))
        .collect();
    let col_labels: Vec<String> = (0..allocation.cols())
        .map(|j| label(destination_names, j, 'D'))
        .collect();

    let label_width = row_labels.iter().map(String::len).max().unwrap_or(0);
    let cell_width = allocation
        .as_slice()
        .iter()
        .map(|q| q.to_string().len())
        .chain(col_labels.iter().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for name in &col_labels {
        out.push_str(&format!("  {name:>cell_width$}"));
    }
    out.push('\n');

    for (i, name) in row_labels.iter().enumerate() {
        out.push_str(&format!("{name:<label_width$}"));
        for j in 0..allocation.cols() {
            out.push_str(&format!("  {:>cell_width$}", allocation.get(i, j)));
        }
        out.push('\n');
    }
    out
}

/// Renders every result as a titled table followed by its total cost.
pub fn render_report(parsed: &ParsedProblem, results: &[MethodResult]) -> String {
    let mut out = String::new();
    for (k, result) in results.iter().enumerate() {
        if k > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}:\n\n", result.method));
        out.push_str(&render_allocation(
            &result.allocation,
            &parsed.source_names,
            &parsed.destination_names,
        ));
        out.push_str(&format!("\nTotal Cost: {}\n", result.total_cost));
    }
    out
}

fn label(names: &[String], idx: usize, prefix: char) -> String {
    names
        .get(idx)
        .cloned()
        .unwrap_or_else(|| format!("{prefix}{}", idx + 1))
}
