//! Import helpers

use crate::types::Diagnostic;

/// Requires a positive integer import ID, the form numeric-keyed APIs use
pub fn parse_numeric_import_id(id: &str) -> Result<u64, Diagnostic> {
    let trimmed = id.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Diagnostic::error(
            "Invalid import ID",
            format!("Expected a numeric ID, got '{}'", id),
        ));
    }
    trimmed.parse::<u64>().map_err(|e| {
        Diagnostic::error("Invalid import ID", format!("Could not parse '{}': {}", id, e))
    })
}
