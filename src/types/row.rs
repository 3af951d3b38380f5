use std::fmt;

use crate::parse::{self, EncodingError};

/// Typed form of a positional field name like `rules[3].baseFee`.
///
/// The index segment encodes the owning row's position in its list; it is
/// rewritten on every structural change rather than trusted from creation
/// time. `Display` re-encodes the name exactly as it appears in form markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    list: String,
    index: usize,
    attribute: String,
}

impl FieldName {
    #[must_use]
    pub fn new(list: impl Into<String>, index: usize, attribute: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            index,
            attribute: attribute.into(),
        }
    }

    /// Parse an encoded field name, e.g. `rules[3].baseFee`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the input does not match the
    /// `<list>[<index>].<attribute>` shape.
    pub fn parse(input: &str) -> Result<Self, EncodingError> {
        parse::field_name(input)
    }

    #[must_use]
    pub fn list(&self) -> &str {
        &self.list
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}].{}", self.list, self.index, self.attribute)
    }
}

/// Typed form of a positional checkbox element id like `isExpress_3`.
///
/// The trailing decimal run is the index; everything before it is the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxId {
    prefix: String,
    index: usize,
}

impl CheckboxId {
    #[must_use]
    pub fn new(prefix: impl Into<String>, index: usize) -> Self {
        Self {
            prefix: prefix.into(),
            index,
        }
    }

    /// Parse an encoded checkbox id, e.g. `isExpress_3`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the input has no trailing index or no
    /// prefix.
    pub fn parse(input: &str) -> Result<Self, EncodingError> {
        parse::checkbox_id(input)
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.index)
    }
}

/// One named input inside a rule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowField {
    pub name: FieldName,
    pub value: String,
}

impl RowField {
    #[must_use]
    pub fn new(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A checkbox input plus its label association. `id` and `label_for` must
/// always agree; renumbering keeps them in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxField {
    pub name: FieldName,
    pub id: CheckboxId,
    pub label_for: CheckboxId,
    pub checked: bool,
}

impl CheckboxField {
    #[must_use]
    pub fn new(name: FieldName, id: CheckboxId, checked: bool) -> Self {
        Self {
            name,
            label_for: id.clone(),
            id,
            checked,
        }
    }
}

/// One instance of the repeatable rule form fragment.
///
/// `rule_id` is the persisted identifier, empty string for rows that have not
/// been saved yet. `heading` is the human-readable label showing the 1-based
/// display index; the field names and checkbox ids carry the 0-based encoding
/// index. Both are derived from the row's actual position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    pub rule_id: String,
    pub heading: String,
    pub fields: Vec<RowField>,
    pub checkboxes: Vec<CheckboxField>,
}

impl RuleRow {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        !self.rule_id.is_empty()
    }

    /// The index every positional encoding in this row agrees on, or `None`
    /// if any two encodings disagree (a stale-index bug) or the row carries
    /// no encodings at all.
    #[must_use]
    pub fn encoded_index(&self) -> Option<usize> {
        let mut agreed: Option<usize> = None;
        let indices = self
            .fields
            .iter()
            .map(|f| f.name.index())
            .chain(self.checkboxes.iter().flat_map(|c| {
                [c.name.index(), c.id.index(), c.label_for.index()]
            }));
        for index in indices {
            match agreed {
                None => agreed = Some(index),
                Some(seen) if seen != index => return None,
                Some(_) => {}
            }
        }
        agreed
    }

    /// Rewrite every positional encoding in this row from `index`. The
    /// heading shows `index + 1`.
    pub(crate) fn apply_index(&mut self, index: usize, heading_prefix: &str) {
        for field in &mut self.fields {
            field.name.set_index(index);
        }
        for checkbox in &mut self.checkboxes {
            checkbox.name.set_index(index);
            checkbox.id.set_index(index);
            checkbox.label_for = checkbox.id.clone();
        }
        self.heading = format!("{heading_prefix}{}", index + 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CheckboxSpec {
    attribute: String,
    id_prefix: String,
}

/// Typed row builder replacing the `{INDEX}`-placeholder string template of
/// the legacy markup approach.
///
/// A template carries the list name, the named attributes, the checkbox
/// specs, and the heading prefix. [`instantiate`](Self::instantiate) takes a
/// single source-of-truth index; the display index is derived from it rather
/// than substituted in a second pass.
///
/// # Example
///
/// ```
/// use shopadmin::RowTemplate;
///
/// let template = RowTemplate::new("rules", "Rule #")
///     .attribute("ruleName")
///     .attribute("baseFee")
///     .checkbox("isExpress", "isExpress_");
///
/// let row = template.instantiate(0);
/// assert_eq!(row.fields[0].name.to_string(), "rules[0].ruleName");
/// assert_eq!(row.heading, "Rule #1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    list: String,
    heading_prefix: String,
    attributes: Vec<String>,
    checkboxes: Vec<CheckboxSpec>,
}

impl RowTemplate {
    #[must_use]
    pub fn new(list: impl Into<String>, heading_prefix: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            heading_prefix: heading_prefix.into(),
            attributes: Vec::new(),
            checkboxes: Vec::new(),
        }
    }

    /// Add a named text attribute; rows instantiate it as
    /// `<list>[<index>].<attribute>`.
    #[must_use]
    pub fn attribute(mut self, name: &str) -> Self {
        self.attributes.push(name.to_owned());
        self
    }

    /// Add a checkbox attribute with its element-id prefix; rows instantiate
    /// its id and label association as `<id_prefix><index>`.
    #[must_use]
    pub fn checkbox(mut self, attribute: &str, id_prefix: &str) -> Self {
        self.checkboxes.push(CheckboxSpec {
            attribute: attribute.to_owned(),
            id_prefix: id_prefix.to_owned(),
        });
        self
    }

    /// Swap the id prefix of an existing checkbox attribute. This is the
    /// edit-dialog variant substitution: applied once when the page loads,
    /// never per row, so the create and edit lists cannot collide on element
    /// ids.
    #[must_use]
    pub fn with_checkbox_prefix(mut self, attribute: &str, id_prefix: &str) -> Self {
        for spec in &mut self.checkboxes {
            if spec.attribute == attribute {
                spec.id_prefix = id_prefix.to_owned();
            }
        }
        self
    }

    /// Build a fresh, unpersisted row encoded at `index`.
    #[must_use]
    pub fn instantiate(&self, index: usize) -> RuleRow {
        let fields = self
            .attributes
            .iter()
            .map(|attribute| RowField::new(FieldName::new(&self.list, index, attribute), ""))
            .collect();
        let checkboxes = self
            .checkboxes
            .iter()
            .map(|spec| {
                CheckboxField::new(
                    FieldName::new(&self.list, index, &spec.attribute),
                    CheckboxId::new(&spec.id_prefix, index),
                    false,
                )
            })
            .collect();
        RuleRow {
            rule_id: String::new(),
            heading: format!("{}{}", self.heading_prefix, index + 1),
            fields,
            checkboxes,
        }
    }

    #[must_use]
    pub fn list(&self) -> &str {
        &self.list
    }

    #[must_use]
    pub fn heading_prefix(&self) -> &str {
        &self.heading_prefix
    }
}
