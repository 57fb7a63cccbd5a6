// src/states/mod.rs

use std::collections::HashSet;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::ConvertError;

/// One row of the state reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub name: String,
    pub id: String,
}

/// Immutable name → id lookup, loaded once at startup and then shared by
/// reference with the classifier and flatteners.
///
/// Entries keep their reference-table order, but prefix lookup always
/// prefers the longest matching name, so results never depend on that
/// order.
#[derive(Debug, Clone)]
pub struct StateDirectory {
    entries: Vec<StateEntry>,
}

impl StateDirectory {
    /// Load the directory from a CSV file of `id,name` rows with exactly
    /// one header line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConvertError::MissingInput(path.to_path_buf()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let mut entries: Vec<StateEntry> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (idx, result) in rdr.records().enumerate() {
            // the header occupies line 1
            let line = idx + 2;
            let record = result.map_err(|e| ConvertError::MalformedReferenceTable {
                line,
                reason: e.to_string(),
            })?;
            if record.len() != 2 {
                return Err(ConvertError::MalformedReferenceTable {
                    line,
                    reason: format!("expected 2 fields, found {}", record.len()),
                });
            }

            // the table is id,name; the name is the lookup key
            let id = record[0].to_string();
            let name = record[1].to_string();
            if !seen.insert(name.clone()) {
                return Err(ConvertError::MalformedReferenceTable {
                    line,
                    reason: format!("duplicate state name `{}`", name),
                });
            }
            entries.push(StateEntry { name, id });
        }

        info!(entries = entries.len(), "loaded state reference table");
        Ok(Self { entries })
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&StateEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns the entry with the longest name that is a prefix of
    /// `line`, if any.
    pub fn longest_prefix_match(&self, line: &str) -> Option<&StateEntry> {
        self.entries
            .iter()
            .filter(|e| line.starts_with(e.name.as_str()))
            .max_by_key(|e| e.name.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
