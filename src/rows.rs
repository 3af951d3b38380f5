use crate::types::{RowTemplate, RuleRow};

/// Ordered list of rule rows plus the template that stamps new ones out.
///
/// The editor owns one invariant: immediately after any mutation, every row's
/// positional encodings (field names, checkbox ids, label associations) equal
/// its current position, and its heading shows the 1-based position. Indices
/// are always re-derived from actual positions, never trusted from the
/// instantiation that created a row.
///
/// # Example
///
/// ```
/// use shopadmin::{RowTemplate, RuleListEditor};
///
/// let template = RowTemplate::new("rules", "Rule #")
///     .attribute("baseFee")
///     .checkbox("isExpress", "isExpress_");
/// let mut editor = RuleListEditor::new(template);
///
/// editor.append();
/// editor.append();
/// editor.remove(0).unwrap();
///
/// let row = &editor.rows()[0];
/// assert_eq!(row.fields[0].name.to_string(), "rules[0].baseFee");
/// assert_eq!(row.heading, "Rule #1");
/// ```
#[derive(Debug, Clone)]
pub struct RuleListEditor {
    template: RowTemplate,
    rows: Vec<RuleRow>,
}

impl RuleListEditor {
    /// An empty editor for the create dialog.
    #[must_use]
    pub fn new(template: RowTemplate) -> Self {
        Self {
            template,
            rows: Vec::new(),
        }
    }

    /// Adopt server-rendered rows for the edit dialog. The rows are
    /// renumbered immediately, so stale encodings from the server never
    /// survive the load.
    #[must_use]
    pub fn load(template: RowTemplate, rows: Vec<RuleRow>) -> Self {
        let mut editor = Self { template, rows };
        editor.renumber();
        editor
    }

    /// Instantiate the template at the next index and append it, then
    /// renumber the whole list from actual positions. The fresh row carries
    /// an empty `rule_id`.
    pub fn append(&mut self) -> &RuleRow {
        let index = self.rows.len();
        self.rows.push(self.template.instantiate(index));
        self.renumber();
        &self.rows[index]
    }

    /// Remove the row at `position` and renumber the remainder. Out of range
    /// returns `None` and leaves the list untouched.
    pub fn remove(&mut self, position: usize) -> Option<RuleRow> {
        if position >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(position);
        self.renumber();
        Some(row)
    }

    /// Rewrite every row's positional encodings from its current position.
    /// Idempotent: renumbering a correctly numbered list changes nothing.
    pub fn renumber(&mut self) {
        let heading_prefix = self.template.heading_prefix().to_owned();
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.apply_index(index, &heading_prefix);
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[RuleRow] {
        &self.rows
    }

    #[must_use]
    pub fn template(&self) -> &RowTemplate {
        &self.template
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
