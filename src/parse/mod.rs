mod error;
mod grammar;

pub use error::EncodingError;

use crate::types::{CheckboxId, FieldName};

/// Parse a positional field name like `rules[3].baseFee`.
///
/// # Errors
///
/// Returns [`EncodingError`] if the input is not a valid encoded field name.
pub(crate) fn field_name(input: &str) -> Result<FieldName, EncodingError> {
    use winnow::Parser;
    grammar::field_name
        .parse(input)
        .map_err(|e| EncodingError::new(e.to_string()))
}

/// Parse a positional checkbox element id like `isExpress_3`.
///
/// # Errors
///
/// Returns [`EncodingError`] if the input is not a valid encoded checkbox id.
pub(crate) fn checkbox_id(input: &str) -> Result<CheckboxId, EncodingError> {
    use winnow::Parser;
    grammar::checkbox_id
        .parse(input)
        .map_err(|e| EncodingError::new(e.to_string()))
}
