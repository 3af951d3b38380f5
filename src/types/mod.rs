mod category;
mod error;
mod row;

pub use category::{CategoryId, CategoryRecord};
pub use error::HierarchyError;
pub use row::{CheckboxField, CheckboxId, FieldName, RowField, RowTemplate, RuleRow};
