// Fixed-width columns
//
// Column widths count characters, not bytes. Fields are left-aligned and
// right-padded with the fill character; splitting trims that padding back off.

use crate::error::{Error, Result};

/// Split a fixed-width row into fields, trimming trailing fill characters.
pub fn split_fixed(row: &str, widths: &[usize], fill: char) -> Result<Vec<String>> {
    let expected: usize = widths.iter().sum();
    let actual = row.chars().count();
    if actual != expected {
        return Err(Error::FixedWidthMismatch { expected, actual });
    }

    let mut fields = Vec::with_capacity(widths.len());
    let mut chars = row.chars();
    for &width in widths {
        let column: String = chars.by_ref().take(width).collect();
        fields.push(column.trim_end_matches(fill).to_string());
    }
    Ok(fields)
}

/// Join fields into a fixed-width row, padding each to its column width.
pub fn join_fixed<I, S>(fields: I, widths: &[usize], fill: char) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fields: Vec<S> = fields.into_iter().collect();
    if fields.len() != widths.len() {
        return Err(Error::ColumnCountMismatch {
            expected: widths.len(),
            actual: fields.len(),
        });
    }

    let mut out = String::with_capacity(widths.iter().sum());
    for (index, (field, &width)) in fields.iter().zip(widths).enumerate() {
        let field = field.as_ref();
        let len = field.chars().count();
        if len > width {
            return Err(Error::FieldTooWide {
                field: index,
                width,
                len,
            });
        }
        out.push_str(field);
        out.extend(std::iter::repeat(fill).take(width - len));
    }
    Ok(out)
}
