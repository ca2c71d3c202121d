use serde_json::Value;
use tracing::error;

use crate::SourceError;

/// Every violation of `schema` found in `data`, in the order the validator
/// reports them, each prefixed with the JSON pointer of the offending value.
/// Empty when the document conforms.
pub fn collect_violations(
    data: &Value, schema: &Value,
) -> Result<Vec<String>, SourceError> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| SourceError::InvalidSchema(e.to_string()))?;

    Ok(validator
        .iter_errors(data)
        .map(|violation| {
            format!("{}: {}", violation.instance_path(), violation)
        })
        .collect())
}

/// Checks `data` against `schema`, logging the full violation list as a
/// single entry on failure.
pub fn validate(data: &Value, schema: &Value) -> Result<(), SourceError> {
    let errors = collect_violations(data, schema).inspect_err(|e| {
        error!("Event data validation failed. {e}");
    })?;

    if errors.is_empty() {
        return Ok(());
    }

    let err = SourceError::Validation { errors };
    error!("{err}");
    Err(err)
}
