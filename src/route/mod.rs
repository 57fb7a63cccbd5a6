// src/route/mod.rs

use regex::Regex;

use crate::ConvertError;

/// How a report file encodes its year dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// One year per file, named `<label><YYYY>.pdf`.
    Yearly { year: u16 },
    /// A contiguous year range packed into each row, named
    /// `<label><YYYY>_<YYYY>.pdf`.
    Combined { start: u16, end: u16 },
}

/// File-name-derived metadata driving flattener selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDescriptor {
    /// The non-digit label prefix, used verbatim as the output base name.
    /// Downstream, a case-insensitive `gender` substring in it selects the
    /// Male/Female header over the Yes/No one.
    pub base_name: String,
    pub kind: ReportKind,
}

/// Classify an input file by its name.
///
/// The combined pattern is tried first: its suffix shape contains the
/// yearly one, so the order matters. Both patterns are anchored to the
/// whole name to avoid substring misroutes. An inverted range
/// (`start > end`) denotes no years and is rejected.
pub fn route(file_name: &str) -> Result<ReportDescriptor, ConvertError> {
    let combined =
        Regex::new(r"^(\D+)(\d{4})_(\d{4})\.pdf$").expect("invalid combined report pattern");
    if let Some(caps) = combined.captures(file_name) {
        let start: u16 = caps[2].parse().expect("year capture is four digits");
        let end: u16 = caps[3].parse().expect("year capture is four digits");
        if start > end {
            return Err(ConvertError::UnrecognizedFileName(file_name.to_string()));
        }
        return Ok(ReportDescriptor {
            base_name: caps[1].to_string(),
            kind: ReportKind::Combined { start, end },
        });
    }

    let yearly = Regex::new(r"^(\D+)(\d{4})\.pdf$").expect("invalid yearly report pattern");
    if let Some(caps) = yearly.captures(file_name) {
        let year: u16 = caps[2].parse().expect("year capture is four digits");
        return Ok(ReportDescriptor {
            base_name: caps[1].to_string(),
            kind: ReportKind::Yearly { year },
        });
    }

    Err(ConvertError::UnrecognizedFileName(file_name.to_string()))
}
