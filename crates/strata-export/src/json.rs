//! Versioned JSON document wrapping the bundle as-is.

use serde::Serialize;
use strata_core::{ExportError, FoundationBundle};

use crate::EncodeOptions;

/// Schema version written into every JSON export.
pub const DOCUMENT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
struct TokenDocument<'a> {
    version: &'static str,
    tokens: &'a FoundationBundle,
}

pub fn encode(bundle: &FoundationBundle, options: &EncodeOptions) -> Result<String, ExportError> {
    let document = TokenDocument {
        version: DOCUMENT_VERSION,
        tokens: bundle,
    };
    let result = if options.minify {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document).map(|mut json| {
            json.push('\n');
            json
        })
    };
    result.map_err(|e| ExportError::Serialize {
        reason: e.to_string(),
    })
}
