// src/flatten/range.rs

use tracing::debug;

use crate::states::StateDirectory;
use crate::ConvertError;

use super::{classify, OutputRecord, COLUMNS_PER_YEAR, TOTAL_IDX};

/// Expand every data row of a combined multi-year page into one record
/// per year in `[start, end]`.
///
/// Each row carries one four-token group per year, ascending from
/// `start`. A group whose Total column is the literal `"0"` marks a year
/// this report does not cover; it is dropped entirely so a zero-fill
/// placeholder can never clobber a real value from another file covering
/// the same year when outputs are appended.
///
/// Callers guarantee `start <= end` (the router rejects inverted ranges).
pub fn flatten(
    page: &str,
    start: u16,
    end: u16,
    directory: &StateDirectory,
) -> Result<Vec<OutputRecord>, ConvertError> {
    let span = usize::from(end - start) + 1;
    let expected = span * COLUMNS_PER_YEAR;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in page.lines() {
        let (entry, tokens) = match classify(line, directory) {
            Some(hit) => hit,
            None => continue,
        };
        if tokens.len() != expected {
            return Err(ConvertError::RowShapeMismatch {
                state: entry.name.clone(),
                expected,
                found: tokens.len(),
            });
        }
        for (offset, group) in tokens.chunks_exact(COLUMNS_PER_YEAR).enumerate() {
            if group[TOTAL_IDX] == "0" {
                skipped += 1;
                continue;
            }
            records.push(OutputRecord {
                state_id: entry.id.clone(),
                year: start + offset as u16,
                values: std::array::from_fn(|i| group[i].clone()),
            });
        }
    }
    debug!(
        records = records.len(),
        skipped, start, end, "flattened combined page"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,pdfreports::flatten=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn directory() -> Result<StateDirectory> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"StateId,StateName\n1,Alabama\n2,Alaska\n")?;
        Ok(StateDirectory::load(tmp.path())?)
    }

    #[test]
    fn expands_groups_in_ascending_year_order() -> Result<()> {
        init_test_logging();
        let dir = directory()?;
        let page = "Alabama 10 5 15 0 12 8 20 1\n";

        let records = flatten(page, 2012, 2013, &dir)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2012);
        assert_eq!(records[0].values, ["10", "5", "15", "0"]);
        assert_eq!(records[1].year, 2013);
        assert_eq!(records[1].values, ["12", "8", "20", "1"]);
        Ok(())
    }

    #[test]
    fn zero_total_groups_are_skipped() -> Result<()> {
        init_test_logging();
        let dir = directory()?;
        // five years, 2012..=2016; 2014 through 2016 are zero-filled
        // except the final year which carries a real total
        let page = "Alabama 10 5 15 0 12 8 20 0 0 0 0 0 0 0 0 0 0 0 20 0\n";

        let records = flatten(page, 2012, 2016, &dir)?;
        let years: Vec<u16> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2012, 2013, 2016]);
        assert_eq!(records[2].values, ["0", "0", "20", "0"]);
        Ok(())
    }

    #[test]
    fn a_fully_zero_filled_row_emits_nothing() -> Result<()> {
        let dir = directory()?;
        let page = "Alaska 0 0 0 0 0 0 0 0\n";

        let records = flatten(page, 2012, 2013, &dir)?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn exact_fit_passes_and_off_by_one_fails() -> Result<()> {
        let dir = directory()?;

        // 2 years × 4 columns = 8 tokens: exact fit
        assert_eq!(flatten("Alabama 1 2 3 4 5 6 7 8\n", 2012, 2013, &dir)?.len(), 2);

        // 7 tokens: one short
        let err = flatten("Alabama 1 2 3 4 5 6 7\n", 2012, 2013, &dir).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::RowShapeMismatch {
                expected: 8,
                found: 7,
                ..
            }
        ));

        // 9 tokens: one long
        let err = flatten("Alabama 1 2 3 4 5 6 7 8 9\n", 2012, 2013, &dir).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::RowShapeMismatch {
                expected: 8,
                found: 9,
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn single_year_range_behaves_like_one_group() -> Result<()> {
        let dir = directory()?;
        let records = flatten("Alabama 12 8 20 0\n", 2015, 2015, &dir)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2015);
        Ok(())
    }
}
