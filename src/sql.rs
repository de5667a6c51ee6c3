//! Insert statement text assembly.

use crate::placeholder::Placeholder;

/// Renders the value-list fragment of an insert statement: `rows` groups of
/// `columns` comma-separated marks, groups parenthesized and comma-joined
/// with no trailing separator, e.g. `(?,?,?),(?,?,?)`.
///
/// Marks are generated row-major, so the global index of the mark at
/// `(row, column)` is `row * columns + column`. A group body degenerates to
/// the literal `null` when `columns == 0` (the insert then relies on column
/// defaults), and `rows == 0` yields an empty string.
#[must_use]
pub fn insert_values(mark: &Placeholder, columns: usize, rows: usize) -> String {
    // Size the buffer from one sample mark. Variable-width generators only
    // cost a realloc, never an incorrect result.
    let mark_len = mark.render(0, 0, 0).len();
    let mut out = String::with_capacity((mark_len + 1) * columns * rows + 3 * rows);

    for row in 0..rows {
        if row > 0 {
            out.push(',');
        }
        out.push('(');
        for column in 0..columns {
            if column > 0 {
                out.push(',');
            }
            out.push_str(&mark.render(row * columns + column, column, row));
        }
        if columns == 0 {
            out.push_str("null");
        }
        out.push(')');
    }

    out
}

/// Renders a complete multi-row insert statement:
/// `insert into <table> (<col1>,<col2>,...) values <groups>`.
///
/// The text format is fixed - lowercase keywords, no space after commas -
/// because drivers with numbered placeholder dialects are sensitive to the
/// exact mark sequence embedded in it.
#[must_use]
pub fn insert_statement(
    table: &str,
    columns: &[&str],
    mark: &Placeholder,
    rows: usize,
) -> String {
    format!(
        "insert into {} ({}) values {}",
        table,
        columns.join(","),
        insert_values(mark, columns.len(), rows)
    )
}
