//! View-agnostic remainder of the page glue: the close-dialog navigation
//! contract and dialog field population from trigger attributes. The DOM
//! wiring itself stays with the caller.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("trigger control is missing expected attribute '{attribute}'")]
    MissingAttribute { attribute: String },
}

/// Where the browser must navigate after an edit dialog closes without
/// saving. When the current path still carries an `edit` segment, the caller
/// must move to the listing path so the dialog does not reopen on reload;
/// otherwise no navigation happens.
#[must_use]
pub fn close_redirect<'a>(pathname: &str, listing: &'a str) -> Option<&'a str> {
    if pathname.split('/').any(|segment| segment == "edit") {
        Some(listing)
    } else {
        None
    }
}

/// Attribute payload carried by the control that opened a dialog
/// (the `data-*` attributes of the trigger element).
#[derive(Debug, Clone, Default)]
pub struct TriggerData {
    attributes: HashMap<String, String>,
}

impl TriggerData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, attribute: &str, value: &str) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: &str, value: &str) {
        self.attributes
            .insert(attribute.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }
}

/// One dialog field assignment produced by [`populate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub target: String,
    pub value: String,
}

/// Resolve `(target, attribute)` bindings against the trigger payload.
///
/// Callers apply the returned updates to their dialog fields. A missing
/// attribute is reported as an error for the caller to log; it must never
/// take the page down.
///
/// # Errors
///
/// Returns [`PageError::MissingAttribute`] naming the first absent attribute.
pub fn populate(
    trigger: &TriggerData,
    bindings: &[(&str, &str)],
) -> Result<Vec<FieldUpdate>, PageError> {
    let mut updates = Vec::with_capacity(bindings.len());
    for (target, attribute) in bindings {
        let value = trigger
            .get(attribute)
            .ok_or_else(|| PageError::MissingAttribute {
                attribute: (*attribute).to_owned(),
            })?;
        updates.push(FieldUpdate {
            target: (*target).to_owned(),
            value: value.to_owned(),
        });
    }
    Ok(updates)
}
