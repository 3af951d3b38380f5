use thiserror::Error;

use crate::page::PageError;
use crate::parse::EncodingError;
use crate::toggle::ToggleError;
use crate::types::HierarchyError;

/// Unified error type covering hierarchy validation, positional-encoding
/// parsing, toggle sequencing, and dialog population.
///
/// Convenient for callers that thread several components through one
/// fallible page-controller path.
#[derive(Debug, Error)]
pub enum ShopAdminError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Toggle(#[from] ToggleError),

    #[error(transparent)]
    Page(#[from] PageError),
}
