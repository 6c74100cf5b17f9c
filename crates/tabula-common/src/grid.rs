//! Aligned text grids.

/// Lays out a matrix of strings as an aligned text grid.
///
/// Every column is padded on the right to the width of its widest cell,
/// including the last one. Columns are joined with `separator` and each row
/// ends with a newline. The column count is taken from the first row; missing
/// trailing cells of shorter rows render as empty strings.
///
/// # Examples
///
/// ```
/// use tabula_common::to_grid_string;
///
/// let grid = to_grid_string(&[vec!["a", "bb"], vec!["ccc", "d"]], " | ");
/// assert_eq!(grid, "a   | bb\nccc | d \n");
/// ```
pub fn to_grid_string<S: AsRef<str>>(matrix: &[Vec<S>], separator: &str) -> String {
    let Some(first) = matrix.first() else {
        return String::new();
    };
    let column_count = first.len();

    let widths: Vec<usize> = (0..column_count)
        .map(|c| {
            matrix
                .iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.as_ref().chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in matrix {
        for (c, width) in widths.iter().enumerate() {
            let cell = row.get(c).map(AsRef::as_ref).unwrap_or("");
            out.push_str(cell);
            let pad = width.saturating_sub(cell.chars().count());
            out.extend(std::iter::repeat_n(' ', pad));
            if c + 1 != column_count {
                out.push_str(separator);
            }
        }
        out.push('\n');
    }
    out
}
