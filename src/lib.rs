mod error;
mod page;
mod parse;
mod rows;
mod toggle;
mod tree;
mod types;

pub use error::ShopAdminError;
pub use page::{close_redirect, populate, FieldUpdate, PageError, TriggerData};
pub use parse::EncodingError;
pub use rows::RuleListEditor;
pub use toggle::{
    Notice, StatusToggle, ToggleError, ToggleOutcome, ToggleRequest, ToggleResolution,
};
pub use tree::CategoryTree;
pub use types::{
    CategoryId, CategoryRecord, CheckboxField, CheckboxId, FieldName, HierarchyError, RowField,
    RowTemplate, RuleRow,
};
