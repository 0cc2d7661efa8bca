// Multi-row split/join, sequential and parallel
//
// Rows are independent once their boundaries are known, so each one is
// split or joined on its own. The parallel variants hand rows to rayon and
// collect results in input order. Errors carry the index of the row that
// failed; when several rows fail, the lowest index is reported.

use rayon::prelude::*;
use tracing::debug;

use super::join::join_quoted_row;
use super::split::split_quoted_row;
use crate::core::Signals;
use crate::error::{Error, Result};

/// Split each row in turn. Stops at the first failing row.
pub fn split_quoted_rows<I, S>(rows: I, signals: &Signals) -> Result<Vec<Vec<String>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(row, text)| split_quoted_row(text.as_ref(), signals).map_err(|e| e.in_row(row)))
        .collect()
}

/// Join each row in turn. Stops at the first failing row.
pub fn join_quoted_rows<R, F>(rows: R, signals: &Signals, force_quotes: bool) -> Result<Vec<String>>
where
    R: IntoIterator<Item = F>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    if force_quotes && !signals.quote_is_specified() {
        return Err(Error::ForceQuotesWithoutQuote);
    }
    rows.into_iter()
        .enumerate()
        .map(|(row, fields)| {
            join_quoted_row(fields, signals, force_quotes).map_err(|e| e.in_row(row))
        })
        .collect()
}

/// Split rows in parallel, returning fields in input row order
pub fn split_quoted_rows_parallel<S>(rows: &[S], signals: &Signals) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    debug!(rows = rows.len(), "parallel split");
    // Collect every result first so the lowest failing row is the one reported
    rows.par_iter()
        .enumerate()
        .map(|(row, text)| split_quoted_row(text.as_ref(), signals).map_err(|e| e.in_row(row)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Join rows in parallel, returning row text in input order
pub fn join_quoted_rows_parallel<F, S>(
    rows: &[F],
    signals: &Signals,
    force_quotes: bool,
) -> Result<Vec<String>>
where
    F: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    if force_quotes && !signals.quote_is_specified() {
        return Err(Error::ForceQuotesWithoutQuote);
    }
    debug!(rows = rows.len(), "parallel join");
    rows.par_iter()
        .enumerate()
        .map(|(row, fields)| {
            join_quoted_row(fields.as_ref(), signals, force_quotes).map_err(|e| e.in_row(row))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows() {
        let rows = split_quoted_rows(["a,b", "\"c,d\",e"], &Signals::csv()).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c,d", "e"]]);
    }

    #[test]
    fn test_split_rows_error_names_row() {
        let err = split_quoted_rows(["a,b", "ok", "\"open"], &Signals::csv()).unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedQuote { field: 0 }.in_row(2)
        );
        assert_eq!(err.to_string(), "row 2: unterminated quote in field 0");
    }

    #[test]
    fn test_join_rows() {
        let rows = vec![vec!["a", "b,c"], vec!["d"]];
        let joined = join_quoted_rows(&rows, &Signals::csv(), false).unwrap();
        assert_eq!(joined, vec!["a,\"b,c\"", "d"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rows = Vec::new();
        for i in 0..1000 {
            rows.push(format!("{},\"{},{}\",x\"\"y", i, i + 1, i + 2));
        }
        let sequential = split_quoted_rows(&rows, &Signals::csv()).unwrap();
        let parallel = split_quoted_rows_parallel(&rows, &Signals::csv()).unwrap();
        assert_eq!(parallel.len(), 1000);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[999], vec!["999", "1000,1001", "x\"\"y"]);

        let rejoined = join_quoted_rows_parallel(&parallel, &Signals::csv(), false).unwrap();
        let again = split_quoted_rows_parallel(&rejoined, &Signals::csv()).unwrap();
        assert_eq!(again, parallel);
    }

    #[test]
    fn test_parallel_reports_lowest_failing_row() {
        let mut rows: Vec<String> = (0..500).map(|i| i.to_string()).collect();
        rows[120] = "\"bad".to_string();
        rows[480] = "\"bad".to_string();
        let err = split_quoted_rows_parallel(&rows, &Signals::csv()).unwrap_err();
        assert!(matches!(err, Error::Row { row: 120, .. }));
    }

    #[test]
    fn test_parallel_join_force_quotes_checked_up_front() {
        let signals = Signals::new(",", "", "\n", "").unwrap();
        let rows = vec![vec!["a"]];
        assert_eq!(
            join_quoted_rows_parallel(&rows, &signals, true),
            Err(Error::ForceQuotesWithoutQuote)
        );
    }
}
