// src/flatten/yearly.rs

use tracing::debug;

use crate::states::StateDirectory;
use crate::ConvertError;

use super::{classify, OutputRecord, COLUMNS_PER_YEAR};

/// Rewrite every data row of a single-year page into one record for the
/// externally supplied `year`, in source line order.
///
/// A data row must carry exactly four value tokens; anything else aborts
/// the run rather than mis-slicing.
pub fn flatten(
    page: &str,
    year: u16,
    directory: &StateDirectory,
) -> Result<Vec<OutputRecord>, ConvertError> {
    let mut records = Vec::new();
    for line in page.lines() {
        let (entry, tokens) = match classify(line, directory) {
            Some(hit) => hit,
            None => continue,
        };
        if tokens.len() != COLUMNS_PER_YEAR {
            return Err(ConvertError::RowShapeMismatch {
                state: entry.name.clone(),
                expected: COLUMNS_PER_YEAR,
                found: tokens.len(),
            });
        }
        records.push(OutputRecord {
            state_id: entry.id.clone(),
            year,
            values: std::array::from_fn(|i| tokens[i].clone()),
        });
    }
    debug!(records = records.len(), year, "flattened yearly page");
    Ok(records)
}
