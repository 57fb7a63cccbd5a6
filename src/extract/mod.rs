// src/extract/mod.rs

use std::path::Path;

use tracing::debug;

use crate::ConvertError;

/// Extract the full text content of a PDF in reading order, page breaks
/// as line breaks.
///
/// Everything about the PDF itself (layout, hyphenation, encoding) is
/// delegated to `pdf_extract`; this module only maps the failure into the
/// pipeline's error type with the offending path attached.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String, ConvertError> {
    let path = path.as_ref();
    let text = pdf_extract::extract_text(path).map_err(|e| ConvertError::Extraction {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), chars = text.len(), "extracted PDF text");
    Ok(text)
}
